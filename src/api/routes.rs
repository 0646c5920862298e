//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::*;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Robot API Mock",
        version = "0.1.0",
        description = "Mock of a robotic-device HTTP control API. Returns synthetic identifiers; nothing is validated or stored.",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:31950", description = "Local mock server")
    ),
    paths(
        handlers::health_check,
        handlers::upload_protocol,
        handlers::create_run,
        handlers::run_action,
    ),
    components(schemas(
        HealthResponse,
        UploadProtocolResponse,
        ProtocolData,
        CreateRunRequest,
        CreateRunPayload,
        CreateRunResponse,
        RunData,
        RunActionRequest,
        RunActionPayload,
        RunActionResponse,
        ActionData,
        ErrorResponse,
    )),
    tags(
        (name = "Health", description = "Liveness endpoint"),
        (name = "Protocols", description = "Protocol upload endpoints"),
        (name = "Runs", description = "Run creation and control endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // Protocol upload
        .route("/protocols", post(handlers::upload_protocol))
        // Run creation and actions
        .route("/runs", post(handlers::create_run))
        .route("/runs/:id/actions", post(handlers::run_action))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add shared state
        .with_state(state)
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}
