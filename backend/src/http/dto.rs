//! Data Transfer Objects for the HTTP API.
//!
//! Payloads are re-exported from the routes module since they already derive
//! Serialize/Deserialize; this module adds the response envelope.

use serde::{Deserialize, Serialize};

pub use crate::models::KeyDate;
pub use crate::routes::summary::{CurrentTerm, YearSummary};
pub use crate::routes::terms::{TermDetail, TermSummary};

/// Success envelope: `{"status": "ok", "details": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `"ok"`
    pub status: String,
    /// Endpoint payload
    pub details: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(details: T) -> Self {
        Self {
            status: "ok".to_string(),
            details,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Home timezone used for every date
    pub timezone: String,
    /// School years with configured terms
    pub years: Vec<String>,
}
