use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::MessageResponse;
use crate::state::AppState;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World"))
}

/// Name of the project the images belong to
pub async fn project(State(state): State<Arc<AppState>>) -> Json<String> {
    Json(state.config.project_name.clone())
}
