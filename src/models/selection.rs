//! User selection state: site dropdown value and payload-mass slider range.
//!
//! A [`Selection`] is rebuilt whole on every interaction event and never
//! mutated in place, so downstream computations always see one consistent
//! snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Wire sentinel for "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Payload slider bounds and step, in kilograms.
pub const SLIDER_MIN_KG: f64 = 0.0;
pub const SLIDER_MAX_KG: f64 = 10_000.0;
pub const SLIDER_STEP_KG: f64 = 1_000.0;

/// Errors constructing a selection from raw widget values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("payload range is inverted: {min_kg} > {max_kg}")]
    InvertedRange { min_kg: f64, max_kg: f64 },
    #[error("payload bound is not a finite number")]
    NonFiniteBound,
    #[error("payload bound is negative: {0}")]
    NegativeBound(f64),
}

/// Site dropdown value: either the ALL sentinel or a specific site.
///
/// Site strings are not validated against the dataset; an unknown site
/// simply matches no records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteFilter {
    All,
    Site(String),
}

impl SiteFilter {
    /// Parse a raw dropdown value, treating the `ALL` sentinel specially.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(raw.to_string())
        }
    }

    /// Whether a record at `site` passes this filter.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => f.write_str(ALL_SITES),
            SiteFilter::Site(site) => f.write_str(site),
        }
    }
}

/// Inclusive payload-mass range `[min_kg, max_kg]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    min_kg: f64,
    max_kg: f64,
}

impl PayloadRange {
    /// Build an ordered range. The range widget is expected to produce valid
    /// ordered pairs; this constructor is the boundary that enforces it.
    pub fn new(min_kg: f64, max_kg: f64) -> Result<Self, SelectionError> {
        if !min_kg.is_finite() || !max_kg.is_finite() {
            return Err(SelectionError::NonFiniteBound);
        }
        if min_kg < 0.0 {
            return Err(SelectionError::NegativeBound(min_kg));
        }
        if max_kg < 0.0 {
            return Err(SelectionError::NegativeBound(max_kg));
        }
        if min_kg > max_kg {
            return Err(SelectionError::InvertedRange { min_kg, max_kg });
        }
        Ok(Self { min_kg, max_kg })
    }

    pub fn min_kg(&self) -> f64 {
        self.min_kg
    }

    pub fn max_kg(&self) -> f64 {
        self.max_kg
    }

    /// Inclusive on both ends.
    pub fn contains(&self, mass_kg: f64) -> bool {
        mass_kg >= self.min_kg && mass_kg <= self.max_kg
    }
}

/// One snapshot of the user's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteFilter,
    pub payload: PayloadRange,
}

impl Selection {
    pub fn new(site: SiteFilter, payload: PayloadRange) -> Self {
        Self { site, payload }
    }

    /// Selection covering every site and the full slider range.
    pub fn unrestricted() -> Self {
        Self {
            site: SiteFilter::All,
            payload: PayloadRange {
                min_kg: SLIDER_MIN_KG,
                max_kg: SLIDER_MAX_KG,
            },
        }
    }
}
