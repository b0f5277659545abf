//! Editor configuration
//!
//! Host-supplied settings for rendering and chord entry. Every field has a
//! default, so a host may pass a partial object (or nothing at all).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown log level: '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),

    #[error("invalid CSS class name: '{0}'")]
    InvalidClassName(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings for the highlight renderer and chord entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// CSS class applied to every chord segment
    pub chord_class: String,

    /// Extra CSS class applied to the active chord segment
    pub active_class: String,

    /// Strip surrounding whitespace from chord-entry input before validating
    pub trim_entry_input: bool,

    /// Maximum log level (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            chord_class: "chord".to_string(),
            active_class: "chord-active".to_string(),
            trim_entry_input: true,
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check class names and log level
    pub fn validate(&self) -> Result<()> {
        for class in [&self.chord_class, &self.active_class] {
            if !is_valid_class_name(class) {
                return Err(ConfigError::InvalidClassName(class.clone()));
            }
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Apply `log_level` to the global logger
    pub fn apply_log_level(&self) -> Result<()> {
        log::set_max_level(self.level_filter()?);
        Ok(())
    }
}

/// Class names end up inside an HTML attribute, so keep them to a safe set
fn is_valid_class_name(class: &str) -> bool {
    !class.is_empty()
        && class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
