//! Streetscape Core - Domain models, errors, and configuration
//!
//! This crate contains the image domain types shared by the store and the API.

pub mod config;
pub mod error;
pub mod models;

pub use error::{Result, StreetscapeError};
