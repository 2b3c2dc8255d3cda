/// Router construction
use crate::{api, middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
pub fn create_router(app_state: AppState) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/health/store", get(api::health::store_health))
        .route("/users/verify", post(api::users::verify_user))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout));

    // Protected routes (session required)
    let protected_routes = Router::new()
        .route("/auth/dashboard", get(api::auth::dashboard))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.sessions),
            middleware::session_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
