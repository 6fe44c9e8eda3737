pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue, StatusCode,
    },
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::access;
use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

/// OPTIONS preflight: empty 200, headers come from the CORS layers.
async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze",
            post(handlers::handle_analyze)
                .options(handle_preflight)
                .fallback(handle_method_not_allowed),
        )
        .route(
            "/api/verify",
            post(access::handle_verify)
                .options(handle_preflight)
                .fallback(handle_method_not_allowed),
        )
        // Profile texts are not capped; the 2 MiB default would answer 413 in plain text.
        .layer(DefaultBodyLimit::disable())
        // Set on every response, errors included.
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("POST, OPTIONS"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static("Content-Type"),
                )),
        )
        .with_state(state)
}
