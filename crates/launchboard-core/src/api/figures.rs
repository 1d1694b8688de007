//! Figure types — typed chart payloads rendered by the frontend.
//!
//! The server does the filtering and aggregation; the frontend maps these
//! straight onto plot traces.

use serde::Serialize;
use utoipa::ToSchema;

/// One slice of a pie figure.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PieSlice {
    pub label: String,
    /// Number of launches in this slice.
    pub value: u64,
}

/// Pie figure: success counts by site, or success vs. failure for one site.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One scatter point: payload mass vs. outcome class.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ScatterPoint {
    /// Payload mass in kilograms.
    pub payload_kg: f64,
    /// Outcome class: 1 = success, 0 = failure.
    pub outcome: u8,
}

/// Points sharing a booster version category (one color on the chart).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScatterSeries {
    pub booster_category: String,
    pub points: Vec<ScatterPoint>,
}

/// Scatter figure: payload mass vs. launch outcome, one series per booster
/// version category.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}
