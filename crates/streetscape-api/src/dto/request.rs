use serde::Deserialize;
use streetscape_core::models::{Bbox, ImageFilters};

/// Image listing request body
#[derive(Debug, Deserialize)]
pub struct FetchImagesRequest {
    pub bbox: Bbox,
    #[serde(default)]
    pub filters: Option<ImageFilters>,
}
