pub mod bbox;
pub mod filters;
pub mod image;
pub mod segmentation;
pub mod stats;

pub use bbox::Bbox;
pub use filters::ImageFilters;
pub use image::{Image, ImageId, ImageMetadata};
pub use segmentation::{Instance, Segmentation};
pub use stats::AggregateStats;
