use serde::{Deserialize, Serialize};

/// Optional filters for image listings.
///
/// No filter keys are recognized yet. Unknown keys are accepted and ignored,
/// so sending filters never changes which images are returned. New filters
/// are added here as typed fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFilters {}
