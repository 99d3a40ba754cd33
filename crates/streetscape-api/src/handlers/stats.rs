use std::sync::Arc;

use axum::{extract::State, Json};
use streetscape_core::models::{AggregateStats, Bbox};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn fetch_stats(
    State(state): State<Arc<AppState>>,
    Json(bbox): Json<Bbox>,
) -> Result<Json<AggregateStats>, ApiError> {
    tracing::info!(?bbox, "Computing aggregate stats");

    let stats = state.image_store.compute_aggregate_stats(&bbox).await?;
    Ok(Json(stats))
}
