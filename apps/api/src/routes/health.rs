use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "status": "Career Prep AI Agent running" }))
}

/// GET /health
/// Liveness only; never touches the model.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
