/// Authentication API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedSession,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use porter_core::{AuthOutcome, Credential};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub username: String,
    pub email: String,
    pub welcome_message: String,
    pub login_time: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub username: String,
    pub email: String,
    pub welcome_message: String,
    pub login_time: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

fn welcome_message(username: &str) -> String {
    format!("Welcome back, {}!", username)
}

/// POST /api/auth/login
pub async fn login(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<Credential>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(credential) = payload?;
    credential.validate()?;

    tracing::info!(username = %credential.username, "Login attempt");

    match app_state.auth_check.authenticate_credential(&credential).await {
        AuthOutcome::Authenticated(record) => {
            let (access_token, claims) = app_state.sessions.issue(&record)?;
            tracing::info!(username = %record.username, "Login successful");

            Ok(Json(LoginResponse {
                access_token,
                token_type: "Bearer".to_string(),
                expires_in: app_state.sessions.lifetime_secs(),
                welcome_message: welcome_message(&record.username),
                login_time: claims.login_time(),
                username: record.username,
                email: record.email,
            }))
        }
        AuthOutcome::InvalidCredentials => {
            tracing::warn!(username = %credential.username, "Login failed");
            Err(ServerError::InvalidCredentials)
        }
        AuthOutcome::LookupFailed(e) => Err(ServerError::from(e)),
    }
}

/// GET /api/auth/dashboard
pub async fn dashboard(AuthenticatedSession(claims): AuthenticatedSession) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        welcome_message: welcome_message(claims.username()),
        login_time: claims.login_time(),
        username: claims.sub,
        email: claims.email,
    })
}

/// POST /api/auth/logout
///
/// Sessions are stateless tokens; the client discards its token.
pub async fn logout() -> Json<LogoutResponse> {
    tracing::info!("User logged out");

    Json(LogoutResponse {
        message: "You have been logged out.".to_string(),
    })
}
