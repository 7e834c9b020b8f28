use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::state::AppState;
use crate::{chat, lawyers};

/// All `/api` routes. Transport layers (CORS, tracing) are added by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/chat", post(chat::ask))
        .route("/api/chat/history", get(chat::history))
        .route("/api/lawyers", get(lawyers::list_lawyers).post(lawyers::create_lawyer))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
