use std::sync::Arc;

use streetscape_store::memory::MemoryImageStore;
use streetscape_store::ports::ImageStore;

use crate::config::ApiConfig;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub image_store: Arc<dyn ImageStore>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(image_store: Arc<dyn ImageStore>, config: ApiConfig) -> Self {
        Self { image_store, config }
    }

    /// State backed by the seeded in-memory store
    pub fn seeded(config: ApiConfig) -> Self {
        Self::new(Arc::new(MemoryImageStore::seeded()), config)
    }
}
