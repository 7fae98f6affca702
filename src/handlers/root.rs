// handlers/root.rs - GET / and GET /health

use axum::response::Json;
use serde_json::{json, Value};

/// GET / - greeting
pub async fn root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

/// GET /health - liveness probe used by deployments and the test harness
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
