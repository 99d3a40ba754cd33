use crate::error::{Result, StreetscapeError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default port the API listens on
pub const DEFAULT_PORT: u16 = 3001;

/// Default project name reported by `GET /project`
pub const DEFAULT_PROJECT_NAME: &str = "placeholder-project-name";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered server configuration: defaults, then file, then environment
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub host: ConfigValue<String>,
    pub port: ConfigValue<u16>,
    pub cors_origin: ConfigValue<String>,
    pub project_name: ConfigValue<String>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            host: ConfigValue::new("0.0.0.0".to_string(), ConfigSource::Default),
            port: ConfigValue::new(DEFAULT_PORT, ConfigSource::Default),
            cors_origin: ConfigValue::new(
                "http://localhost:3000".to_string(),
                ConfigSource::Default,
            ),
            project_name: ConfigValue::new(DEFAULT_PROJECT_NAME.to_string(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| StreetscapeError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| StreetscapeError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(host) = file_config.host {
            self.host.update(host, ConfigSource::File);
        }

        if let Some(port) = file_config.port {
            self.port.update(port, ConfigSource::File);
        }

        if let Some(cors_origin) = file_config.cors_origin {
            self.cors_origin.update(cors_origin, ConfigSource::File);
        }

        if let Some(project_name) = file_config.project_name {
            self.project_name.update(project_name, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // STREETSCAPE_HOST
        if let Ok(host) = env::var("STREETSCAPE_HOST") {
            self.host.update(host, ConfigSource::Environment);
        }

        // STREETSCAPE_PORT
        if let Ok(port_str) = env::var("STREETSCAPE_PORT") {
            match parse_port(&port_str) {
                Ok(port) => self.port.update(port, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid STREETSCAPE_PORT value '{}': expected integer in 1..=65535",
                    port_str
                ),
            }
        }

        // STREETSCAPE_CORS_ORIGIN
        if let Ok(origin) = env::var("STREETSCAPE_CORS_ORIGIN") {
            self.cors_origin.update(origin, ConfigSource::Environment);
        }

        // STREETSCAPE_PROJECT_NAME
        if let Ok(name) = env::var("STREETSCAPE_PROJECT_NAME") {
            self.project_name.update(name, ConfigSource::Environment);
        }

        self
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("host".to_string(), (self.host.value.clone(), self.host.source));
        map.insert("port".to_string(), (self.port.value.to_string(), self.port.source));
        map.insert(
            "cors_origin".to_string(),
            (self.cors_origin.value.clone(), self.cors_origin.source),
        );
        map.insert(
            "project_name".to_string(),
            (self.project_name.value.clone(), self.project_name.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    cors_origin: Option<String>,
    project_name: Option<String>,
}

/// Parse a listening port, rejecting zero
pub fn parse_port(s: &str) -> Result<u16> {
    match s.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(StreetscapeError::ConfigInvalid {
            key: "port".to_string(),
            reason: format!("Invalid port: {}", s),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.host.value, "0.0.0.0");
        assert_eq!(config.port.value, 3001);
        assert_eq!(config.port.source, ConfigSource::Default);
        assert_eq!(config.project_name.value, "placeholder-project-name");
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // Lower precedence should not override
        value.update(400, ConfigSource::File);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
host = "127.0.0.1"
port = 8080
cors_origin = "http://localhost:5173"
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.host.value, "127.0.0.1");
        assert_eq!(config.host.source, ConfigSource::File);
        assert_eq!(config.port.value, 8080);
        assert_eq!(config.cors_origin.value, "http://localhost:5173");
        assert_eq!(config.project_name.source, ConfigSource::Default);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/streetscape.toml");
        assert!(matches!(result, Err(StreetscapeError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port(" 3001 ").unwrap(), 3001);
        assert!(parse_port("0").is_err());
        assert!(parse_port("70000").is_err());
        assert!(parse_port("http").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        let (port, source) = &map["port"];
        assert_eq!(port, "3001");
        assert_eq!(*source, ConfigSource::Default);
        assert!(map.contains_key("cors_origin"));
        assert!(map.contains_key("project_name"));
    }
}
