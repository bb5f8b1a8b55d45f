//! Client configuration types.

use std::path::Path;

use rmeta_logging::LogConfig;
use rmeta_types::status_code::{self, status_code_t};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maps an additional remote exception class to a local status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionOverride {
    pub class_name: String,
    pub code: status_code_t,
}

/// Configuration for the metadata client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaClientConfig {
    /// Extra exception mappings, consulted before the built-in table.
    pub exception_overrides: Vec<ExceptionOverride>,

    /// Log full request records at debug level.
    pub log_requests: bool,
}

impl MetaClientConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for o in &self.exception_overrides {
            if o.class_name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "exception override with empty class_name".into(),
                ));
            }
            if !status_code::is_known(o.code) {
                return Err(ConfigError::Invalid(format!(
                    "exception override for {} uses unknown status code {}",
                    o.class_name, o.code
                )));
            }
        }
        Ok(())
    }
}

/// Top-level configuration file layout.
///
/// ```toml
/// [meta]
/// log_requests = true
///
/// [[meta.exception_overrides]]
/// class_name = "org.apache.ranger.authorization.RangerAccessException"
/// code = 3008
///
/// [log]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub meta: MetaClientConfig,
    pub log: LogConfig,
}

impl ClientConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Config loaded from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.meta.validate()
    }
}
