//! REST API for the intake service.
//!
//! Exposes the contact and request-form submission endpoints plus health and
//! OpenAPI documentation routes. Designed to run standalone or embedded in a
//! larger binary.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use openapi::ApiDoc;
pub use server::{RestApiServer, RestApiStatus};
pub use state::ApiState;

/// Default port for the REST API server
pub const DEFAULT_PORT: u16 = 7080;

/// Build the API router with all routes
pub fn build_router(state: ApiState) -> Router {
    // The marketing sites are served from different origins than the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/api/health", get(routes::health::health))
        .route("/api/status", get(routes::health::status))
        // Submission endpoints
        .route("/api/contact", post(routes::contact::submit))
        .route("/api/project-request", post(routes::requests::submit_project))
        .route(
            "/api/assignment-request",
            post(routes::requests::submit_assignment),
        )
        // API documentation
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the REST API server
pub async fn serve(state: ApiState, port: u16) -> Result<()> {
    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Intake API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
