/// Session middleware
use crate::{
    error::{Result, ServerError},
    services::{Claims, SessionService},
};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Verified session claims, placed in request extensions by `session_middleware`
#[derive(Debug, Clone)]
pub struct AuthenticatedSession(pub Claims);

/// Rejects requests without a valid `Bearer` session token
pub async fn session_middleware(
    State(sessions): State<Arc<SessionService>>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let claims = sessions.verify(bearer_token(request.headers())?)?;
    tracing::debug!(username = %claims.username(), "Session accepted");

    request.extensions_mut().insert(AuthenticatedSession(claims));
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ServerError::Unauthorized("Not logged in".to_string()))
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedSession
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<AuthenticatedSession>()
            .cloned()
            .ok_or_else(|| ServerError::Unauthorized("Not logged in".to_string()))
    }
}
