use axum::{Json, response::IntoResponse, routing::get};
use serde_json::json;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = serde_json::Value)
    )
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    Json(json!({
        "status": "success",
        "message": "Purchases listing service is running"
    }))
}

pub fn health_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/api/health", get(health_checker_handler))
}
