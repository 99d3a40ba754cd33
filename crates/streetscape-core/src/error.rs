//! Error types for Streetscape

use thiserror::Error;

use crate::models::ImageId;

#[derive(Debug, Error)]
pub enum StreetscapeError {
    // Image errors
    #[error("No image found with id '{id}'")]
    ImageNotFound { id: ImageId },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, StreetscapeError>;
