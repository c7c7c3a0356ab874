//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. Computations are cheap and synchronous, so they run inline.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{ApiResponse, HealthResponse, KeyDate, TermDetail, TermSummary, YearSummary};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<ApiResponse<T>>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        timezone: state.dataset.timezone().name().to_string(),
        years: state.dataset.years().map(str::to_string).collect(),
    })
}

// =============================================================================
// Calendar Endpoints
// =============================================================================

/// GET /api/v1/{year}/summary
///
/// School-day totals for the year and the current term, if any.
pub async fn get_summary(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> HandlerResult<YearSummary> {
    let summary = services::get_summary(&state.dataset, &year)?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /api/v1/{year}/terms
///
/// Statistics for every term of the year.
pub async fn get_terms(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> HandlerResult<Vec<TermSummary>> {
    let terms = services::get_terms(&state.dataset, &year)?;
    Ok(Json(ApiResponse::ok(terms)))
}

/// GET /api/v1/{year}/terms/{term}
///
/// One term with the holidays and key dates inside it.
pub async fn get_term_detail(
    State(state): State<AppState>,
    Path((year, term)): Path<(String, String)>,
) -> HandlerResult<TermDetail> {
    let number: usize = term
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid term number '{}'", term)))?;

    let detail = services::get_term_detail(&state.dataset, &year, number)?
        .ok_or_else(|| AppError::NotFound(format!("Term {} of {} not found", number, year)))?;

    Ok(Json(ApiResponse::ok(detail)))
}

/// GET /api/v1/events
///
/// Holidays, key dates and term boundaries from today onward.
pub async fn get_events(State(state): State<AppState>) -> HandlerResult<Vec<KeyDate>> {
    let events = services::get_events(&state.dataset)?;
    Ok(Json(ApiResponse::ok(events)))
}

/// Any other path under /api
pub async fn api_not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
