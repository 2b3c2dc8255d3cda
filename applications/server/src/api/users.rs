/// User lookup API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use porter_core::validate_username;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct VerifyUserRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyUserResponse {
    pub username: String,
    pub exists: bool,
    pub message: String,
}

/// POST /api/users/verify
pub async fn verify_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<VerifyUserRequest>, JsonRejection>,
) -> Result<Json<VerifyUserResponse>> {
    let Json(req) = payload?;
    validate_username(&req.username)?;

    let exists = app_state.store.user_exists(&req.username).await?;
    tracing::info!(username = %req.username, exists, "User existence checked");

    let message = if exists {
        format!("User '{}' was found.", req.username)
    } else {
        format!("User '{}' does not exist.", req.username)
    };

    Ok(Json(VerifyUserResponse {
        username: req.username,
        exists,
        message,
    }))
}
