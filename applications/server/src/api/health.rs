/// Health check API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct StoreHealthResponse {
    pub reachable: bool,
    pub status: u16,
}

/// GET /api/health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/store - Probe the remote user store
pub async fn store_health(State(app_state): State<AppState>) -> Result<Json<StoreHealthResponse>> {
    let status = app_state.store.check_connection().await?;

    Ok(Json(StoreHealthResponse {
        reachable: true,
        status,
    }))
}
