use std::env;

use streetscape_core::config::LayeredConfig;
use streetscape_core::Result;

/// Environment variable pointing at an optional TOML config file
pub const CONFIG_PATH_VAR: &str = "STREETSCAPE_CONFIG";

/// API server configuration resolved from defaults, config file, and environment
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub project_name: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_layered(&LayeredConfig::with_defaults())
    }
}

impl ApiConfig {
    /// Load configuration, reading the file named by `STREETSCAPE_CONFIG` if set
    pub fn from_env() -> Result<Self> {
        let mut layered = LayeredConfig::with_defaults();

        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            tracing::info!(path = %path, "Loading config file");
            layered = layered.load_from_file(&path)?;
        }

        let layered = layered.load_from_env();

        for (key, (value, source)) in layered.to_inspection_map() {
            tracing::debug!(key = %key, value = %value, ?source, "Resolved config value");
        }

        Ok(Self::from_layered(&layered))
    }

    /// Flatten a layered configuration into plain values
    pub fn from_layered(layered: &LayeredConfig) -> Self {
        Self {
            host: layered.host.value.clone(),
            port: layered.port.value,
            cors_origin: layered.cors_origin.value.clone(),
            project_name: layered.project_name.value.clone(),
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
