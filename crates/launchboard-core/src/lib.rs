//! launchboard-core — shared library for the launch records dashboard.
//!
//! Provides:
//! - `dataset` — launch record model, CSV loading, read-only filters
//!
//! With `api` feature (default):
//! - `api` — JSON-serializable API types (schema, figures) and the
//!   conversions that build chart figures from the dataset

pub mod dataset;

#[cfg(feature = "api")]
pub mod api;

/// Version string including git SHA (e.g. "0.1.0-abc1234").
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-", env!("GIT_SHA"));
