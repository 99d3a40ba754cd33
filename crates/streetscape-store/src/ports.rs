use async_trait::async_trait;
use streetscape_core::error::Result;
use streetscape_core::models::{AggregateStats, Bbox, Image, ImageId, ImageMetadata};

/// Port for image record storage and annotation updates
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Images located inside the bounding box, in insertion order
    async fn filter_by_bbox(&self, bbox: &Bbox) -> Result<Vec<Image>>;

    /// Full record for an image
    async fn get_by_id(&self, id: ImageId) -> Result<ImageMetadata>;

    /// Set or clear the rating of an image
    async fn set_rating(&self, id: ImageId, rating: Option<i64>) -> Result<()>;

    /// Replace the tags of an image
    async fn set_tags(&self, id: ImageId, tags: Vec<String>) -> Result<()>;

    /// Replace the notes of an image
    async fn set_notes(&self, id: ImageId, notes: String) -> Result<()>;

    /// Aggregate statistics over the images inside the bounding box
    async fn compute_aggregate_stats(&self, bbox: &Bbox) -> Result<AggregateStats>;

    /// Number of stored images
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
