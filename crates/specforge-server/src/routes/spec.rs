use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use specforge_core::SpecData;

use super::{to_error, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/spec", get(get_spec).put(put_spec))
}

async fn get_spec(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.service.spec().await))
}

async fn put_spec(
    State(state): State<AppState>,
    Json(spec): Json<SpecData>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    state
        .service
        .set_spec(spec)
        .await
        .map(|s| Json(json!(s)))
        .map_err(to_error)
}
