//! Streetscape Store - Image storage port and adapters
//!
//! This crate defines the image repository port and provides the in-memory
//! adapter the API runs on, seeded with a fixed sample dataset.

pub mod memory;
pub mod ports;
pub mod seed;
