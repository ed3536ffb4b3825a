//! Router and middleware wiring
//!
//! Builds the axum application: JSON API routes, HTML page routes, static
//! asset serving, and the request-id/trace/CORS middleware stack. Kept
//! separate from `main` so integration tests can drive the full router.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::time::Instant;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::api;
use crate::members::MemberService;
use crate::pages;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the application router over the given member service
pub fn router(service: MemberService) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(pages::index))
        .route("/new", get(pages::new_member))
        .route("/edit/:id", get(pages::edit_member))
        // Health check
        .route("/api/health", get(health_check))
        // Member API
        .route(
            "/api/members",
            get(api::members::list_members).post(api::members::create_member),
        )
        .route(
            "/api/members/:id",
            get(api::members::get_member)
                .put(api::members::update_member)
                .delete(api::members::delete_member),
        )
        // Static assets for the HTML pages
        .nest_service("/static", ServeDir::new("public/static"))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive()) // Allow CORS for development
        .with_state(service)
}
