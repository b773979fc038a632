//! # Launchdash Backend
//!
//! Backend for an interactive launch-records exploration dashboard.
//!
//! A tabular dataset of rocket launch records is loaded once at startup and
//! held immutably in memory. The frontend drives two charts (a success pie
//! and a payload/outcome scatter) through a REST API: each change to the
//! user's selection (launch-site dropdown, payload-mass range slider) arrives
//! as an HTTP request, and the backend recomputes the filtered record set and
//! both chart datasets from scratch.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated DTO surface for the HTTP API
//! - [`models`]: Launch records, the immutable dataset, and selection state
//! - [`parsing`]: CSV dataset loading
//! - [`services`]: Filtering, chart aggregation, and dashboard orchestration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod models;
pub mod parsing;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
