use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness acknowledgement for the programmatic API.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Hiring Assistant API is running!",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
