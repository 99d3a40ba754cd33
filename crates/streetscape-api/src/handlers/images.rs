use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use streetscape_core::models::{Image, ImageId, ImageMetadata};

use crate::dto::FetchImagesRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// List images inside a bounding box. Filters are accepted but do not
/// narrow the result.
pub async fn fetch_images(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FetchImagesRequest>,
) -> Result<Json<Vec<Image>>, ApiError> {
    tracing::info!(
        bbox = ?request.bbox,
        has_filters = request.filters.is_some(),
        "Fetching images"
    );

    let images = state.image_store.filter_by_bbox(&request.bbox).await?;
    Ok(Json(images))
}

pub async fn fetch_image_metadata(
    State(state): State<Arc<AppState>>,
    Path(image_id): Path<i64>,
) -> Result<Json<ImageMetadata>, ApiError> {
    tracing::info!(image_id, "Fetching image metadata");

    let image = state.image_store.get_by_id(ImageId(image_id)).await?;
    Ok(Json(image))
}

pub async fn set_rating(
    State(state): State<Arc<AppState>>,
    Path(image_id): Path<i64>,
    Json(rating): Json<Option<i64>>,
) -> Result<Json<()>, ApiError> {
    tracing::info!(image_id, ?rating, "Setting rating");

    state.image_store.set_rating(ImageId(image_id), rating).await?;
    Ok(Json(()))
}

pub async fn set_tags(
    State(state): State<Arc<AppState>>,
    Path(image_id): Path<i64>,
    Json(tags): Json<Vec<String>>,
) -> Result<Json<()>, ApiError> {
    tracing::info!(image_id, tag_count = tags.len(), "Setting tags");

    state.image_store.set_tags(ImageId(image_id), tags).await?;
    Ok(Json(()))
}

pub async fn set_notes(
    State(state): State<Arc<AppState>>,
    Path(image_id): Path<i64>,
    Json(notes): Json<String>,
) -> Result<Json<()>, ApiError> {
    tracing::info!(image_id, "Setting notes");

    state.image_store.set_notes(ImageId(image_id), notes).await?;
    Ok(Json(()))
}
