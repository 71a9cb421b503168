//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use domain_account::CustomerDirectory;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub customers: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let customers = state.service.read().await.directory().len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        customers,
    })
}
