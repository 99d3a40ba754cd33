//! In-memory image store.
//!
//! Records live in a `Vec` behind a single `RwLock`: listings and lookups take
//! the read lock, each mutation takes the write lock for its find-and-overwrite.
//! Concurrent mutations of the same image are last-write-wins.
//!
//! Every operation is a linear scan. That is fine for the sample dataset; an
//! index keyed by id is the next step once datasets grow.

use async_trait::async_trait;
use std::sync::Arc;
use streetscape_core::error::{Result, StreetscapeError};
use streetscape_core::models::{AggregateStats, Bbox, Image, ImageId, ImageMetadata};
use tokio::sync::RwLock;

use crate::ports::ImageStore;
use crate::seed;

/// In-memory implementation of ImageStore
#[derive(Debug, Clone, Default)]
pub struct MemoryImageStore {
    images: Arc<RwLock<Vec<ImageMetadata>>>,
}

impl MemoryImageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the sample images
    pub fn seeded() -> Self {
        Self::with_images(seed::sample_images())
    }

    /// Create a store holding the given images, in order
    pub fn with_images(images: Vec<ImageMetadata>) -> Self {
        Self { images: Arc::new(RwLock::new(images)) }
    }
}

/// First record with the given id, or `ImageNotFound`
fn find_mut(images: &mut [ImageMetadata], id: ImageId) -> Result<&mut ImageMetadata> {
    images
        .iter_mut()
        .find(|img| img.id() == id)
        .ok_or(StreetscapeError::ImageNotFound { id })
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn filter_by_bbox(&self, bbox: &Bbox) -> Result<Vec<Image>> {
        let images = self.images.read().await;

        let matches: Vec<Image> =
            images.iter().filter(|img| img.is_within(bbox)).map(Image::from).collect();

        tracing::debug!(matched = matches.len(), total = images.len(), "Filtered images by bbox");
        Ok(matches)
    }

    async fn get_by_id(&self, id: ImageId) -> Result<ImageMetadata> {
        let images = self.images.read().await;
        images
            .iter()
            .find(|img| img.id() == id)
            .cloned()
            .ok_or(StreetscapeError::ImageNotFound { id })
    }

    async fn set_rating(&self, id: ImageId, rating: Option<i64>) -> Result<()> {
        let mut images = self.images.write().await;
        find_mut(&mut images, id)?.rating = rating;
        tracing::debug!(image_id = id.0, ?rating, "Updated rating");
        Ok(())
    }

    async fn set_tags(&self, id: ImageId, tags: Vec<String>) -> Result<()> {
        let mut images = self.images.write().await;
        let image = find_mut(&mut images, id)?;
        tracing::debug!(image_id = id.0, count = tags.len(), "Replacing tags");
        image.tags = tags;
        Ok(())
    }

    async fn set_notes(&self, id: ImageId, notes: String) -> Result<()> {
        let mut images = self.images.write().await;
        find_mut(&mut images, id)?.notes = notes;
        tracing::debug!(image_id = id.0, "Replaced notes");
        Ok(())
    }

    async fn compute_aggregate_stats(&self, bbox: &Bbox) -> Result<AggregateStats> {
        let images = self.images.read().await;
        Ok(AggregateStats::from_images(images.iter().filter(|img| img.is_within(bbox))))
    }

    async fn len(&self) -> usize {
        self.images.read().await.len()
    }
}
