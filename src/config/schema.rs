//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::config::levels::LevelConfig;
use crate::logger::LogLevel;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for scopes without an explicit override.
    pub default_level: LogLevel,

    /// Output format of the tracing subscriber.
    pub format: LogFormat,

    /// `EnvFilter` directive for the backend, used when `RUST_LOG` is unset.
    pub filter: String,

    /// Per-scope level overrides.
    pub scopes: BTreeMap<String, LogLevel>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::Info,
            format: LogFormat::Pretty,
            filter: "info".to_string(),
            scopes: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// The scope levels described by this section.
    pub fn level_config(&self) -> LevelConfig {
        LevelConfig {
            default: self.default_level,
            scopes: self.scopes.clone(),
        }
    }
}

/// Subscriber output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output for development.
    #[default]
    Pretty,
    /// One JSON object per event, for log aggregation.
    Json,
    Compact,
}
