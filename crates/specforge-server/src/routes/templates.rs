use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/templates", get(list_templates))
}

async fn list_templates(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.service.templates()))
}
