use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use specforge_core::CreateDocument;

use super::{to_error, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/documents", get(list_documents).post(upload_document))
        .route("/api/documents/{id}", axum::routing::delete(delete_document))
}

async fn list_documents(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.service.list_documents().await))
}

async fn upload_document(
    State(state): State<AppState>,
    Json(input): Json<CreateDocument>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    state
        .service
        .upload_document(input)
        .await
        .map(|d| (StatusCode::CREATED, Json(json!(d))))
        .map_err(to_error)
}

async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    state
        .service
        .delete_document(&id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(to_error)
}
