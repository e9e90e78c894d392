//! Health check endpoint

use axum::response::Json;
use serde_json::{json, Value};

/// `GET /health` — liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
