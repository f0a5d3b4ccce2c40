use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/models", get(list_models))
}

/// Proxy the endpoint's model listing using the configured token.
async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let config = state.service.config().await;
    if config.api_token.is_empty() {
        return Err((
            StatusCode::CONFLICT,
            Json(json!({ "error": "API token is not set" })),
        ));
    }

    state
        .chat
        .list_models(&config.api_token)
        .await
        .map(|models| Json(json!(models)))
        .map_err(|e| (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() }))))
}
