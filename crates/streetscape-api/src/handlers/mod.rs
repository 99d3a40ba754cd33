mod health;
mod images;
mod root;
mod stats;

pub use health::health_check;
pub use images::{fetch_image_metadata, fetch_images, set_notes, set_rating, set_tags};
pub use root::{project, root};
pub use stats::fetch_stats;
