mod request;
mod response;

pub use request::FetchImagesRequest;
pub use response::{HealthResponse, MessageResponse};
