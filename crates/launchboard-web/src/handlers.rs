//! HTTP request handlers: API endpoints and frontend serving.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::Json;
use rust_embed::Embed;
use serde::Deserialize;

use launchboard_core::api::convert;
use launchboard_core::api::figures::{PieFigure, ScatterFigure};
use launchboard_core::api::schema::DashboardSchema;
use launchboard_core::dataset::{ALL_SITES, PayloadRange, SiteSelection};

use crate::state::AppState;

// ============================================================
// Embedded frontend assets
// ============================================================

#[derive(Embed)]
#[folder = "frontend/dist"]
struct FrontendAssets;

// ============================================================
// Health
// ============================================================

#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
pub(crate) async fn handle_health() -> &'static str {
    "ok"
}

// ============================================================
// Schema
// ============================================================

#[utoipa::path(
    get,
    path = "/api/v1/schema",
    responses(
        (status = 200, description = "Dashboard schema describing dataset and controls", body = DashboardSchema)
    )
)]
pub(crate) async fn handle_schema(State(state): AppState) -> Json<DashboardSchema> {
    Json(DashboardSchema::generate(
        &state.table,
        Some(state.instance.clone()),
    ))
}

// ============================================================
// Pie chart
// ============================================================

#[derive(Deserialize, utoipa::IntoParams)]
pub(crate) struct PieQuery {
    /// Site name, or "ALL" for every site (default).
    site: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/charts/success-pie",
    params(PieQuery),
    responses(
        (status = 200, description = "Success pie figure for the selected site", body = PieFigure)
    )
)]
pub(crate) async fn handle_success_pie(
    State(state): AppState,
    Query(query): Query<PieQuery>,
) -> Json<PieFigure> {
    let selection = SiteSelection::from_value(query.site.as_deref().unwrap_or(ALL_SITES));
    Json(convert::success_pie(&state.table, &selection))
}

// ============================================================
// Scatter chart
// ============================================================

#[derive(Deserialize, utoipa::IntoParams)]
pub(crate) struct ScatterQuery {
    /// Site name, or "ALL" for every site (default).
    site: Option<String>,
    /// Lower payload bound in kg (default: dataset minimum).
    payload_min: Option<f64>,
    /// Upper payload bound in kg (default: dataset maximum).
    payload_max: Option<f64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/charts/payload-scatter",
    params(ScatterQuery),
    responses(
        (status = 200, description = "Payload vs. outcome scatter figure", body = ScatterFigure)
    )
)]
pub(crate) async fn handle_payload_scatter(
    State(state): AppState,
    Query(query): Query<ScatterQuery>,
) -> Json<ScatterFigure> {
    let selection = SiteSelection::from_value(query.site.as_deref().unwrap_or(ALL_SITES));
    // Missing bounds fall back to the dataset's own extent. The bounds are
    // not order-checked; an inverted range yields an empty figure.
    let (data_min, data_max) = state.table.payload_bounds().unwrap_or((0.0, 0.0));
    let range = PayloadRange::new(
        query.payload_min.unwrap_or(data_min),
        query.payload_max.unwrap_or(data_max),
    );
    Json(convert::payload_scatter(&state.table, &selection, range))
}

// ============================================================
// Frontend static files
// ============================================================

pub(crate) async fn serve_frontend(uri: Uri) -> axum::response::Response<Body> {
    let path = uri.path().trim_start_matches('/');

    // Try exact file match first
    if let Some(file) = FrontendAssets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return axum::response::Response::builder()
            .header(header::CONTENT_TYPE, mime.as_ref())
            .body(Body::from(file.data.to_vec()))
            .unwrap();
    }

    // Fallback: serve index.html for non-file paths
    if let Some(index) = FrontendAssets::get("index.html") {
        return axum::response::Response::builder()
            .header(header::CONTENT_TYPE, "text/html")
            .body(Body::from(index.data.to_vec()))
            .unwrap();
    }

    axum::response::Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("not found"))
        .unwrap()
}
