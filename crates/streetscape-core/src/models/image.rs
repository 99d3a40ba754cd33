use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Segmentation;

/// Unique identifier for an image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub i64);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ImageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Geotagged image as returned by bounding-box listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    pub url: String,
    pub lat: f64,
    pub lon: f64,
}

impl Image {
    pub fn new(id: impl Into<ImageId>, url: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self { id: id.into(), url: url.into(), lat, lon }
    }
}

/// Full image record with capture metadata and user annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    #[serde(flatten)]
    pub image: Image,

    /// Pixel width
    pub width: u32,

    /// Pixel height
    pub height: u32,

    #[serde(default)]
    pub altitude: Option<f64>,

    /// Capture time, no timezone attached
    #[serde(default)]
    pub creation_date: Option<NaiveDateTime>,

    #[serde(default)]
    pub panoramic: Option<bool>,

    /// Where the image was obtained from, e.g. `wikimedia-commons`
    #[serde(default)]
    pub source: Option<String>,

    /// Free-text tags; order is kept and duplicates are allowed
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub rating: Option<i64>,

    /// Camera heading in degrees
    #[serde(default)]
    pub compass_angle: Option<f64>,

    #[serde(default)]
    pub notes: String,

    /// Model runs over this image
    #[serde(default)]
    pub segmentation: Vec<Segmentation>,
}

impl ImageMetadata {
    /// Create a record with only the required fields set
    pub fn new(image: Image, width: u32, height: u32) -> Self {
        Self {
            image,
            width,
            height,
            altitude: None,
            creation_date: None,
            panoramic: None,
            source: None,
            tags: Vec::new(),
            rating: None,
            compass_angle: None,
            notes: String::new(),
            segmentation: Vec::new(),
        }
    }

    pub fn id(&self) -> ImageId {
        self.image.id
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_creation_date(mut self, creation_date: NaiveDateTime) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_segmentation(mut self, segmentation: Segmentation) -> Self {
        self.segmentation.push(segmentation);
        self
    }

    /// Check whether the image location falls inside a bounding box
    pub fn is_within(&self, bbox: &super::Bbox) -> bool {
        bbox.contains(self.image.lat, self.image.lon)
    }
}

impl From<&ImageMetadata> for Image {
    fn from(meta: &ImageMetadata) -> Self {
        meta.image.clone()
    }
}
