use serde::Serialize;

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub images: usize,
}

impl HealthResponse {
    pub fn ok(images: usize) -> Self {
        Self { status: "ok", service: "streetscape-api", images }
    }
}
