//! Launch record domain types.

use serde::{Deserialize, Serialize};

/// Binary outcome of a launch attempt.
///
/// The dataset encodes this as the numeric `class` column (1 = success,
/// 0 = failure); serialization keeps the numeric form so chart consumers can
/// use it directly as an axis value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class value (1 = success, 0 = failure).
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.class()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("invalid outcome class {other} (expected 0 or 1)")),
        }
    }
}

/// One row of the launch dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Categorical identifier of the physical launch location.
    pub launch_site: String,
    /// Payload mass in kilograms. Finite and non-negative after load.
    pub payload_mass_kg: f64,
    /// Binary success indicator for the attempt.
    pub outcome: Outcome,
    /// Categorical booster label, used as the scatter chart's color channel.
    pub booster_version_category: String,
}
