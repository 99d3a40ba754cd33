use serde::{Deserialize, Serialize};

/// Labeled polygon produced by a segmentation model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Label name
    pub name: String,

    /// GeoJSON geometry, stored verbatim and never parsed
    pub polygon: String,
}

impl Instance {
    pub fn new(name: impl Into<String>, polygon: impl Into<String>) -> Self {
        Self { name: name.into(), polygon: polygon.into() }
    }
}

/// One named model run over an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Run name
    pub name: String,

    /// Arguments the run was started with (opaque)
    pub run_args: String,

    #[serde(default)]
    pub instances: Vec<Instance>,

    #[serde(default)]
    pub notes: String,
}

impl Segmentation {
    pub fn new(name: impl Into<String>, run_args: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            run_args: run_args.into(),
            instances: Vec::new(),
            notes: String::new(),
        }
    }

    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.instances.push(instance);
        self
    }
}
