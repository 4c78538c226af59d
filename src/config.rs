// Manager configuration, loadable from RON or JSON

use crate::logging::DEFAULT_TARGET;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for building a CommandManager
///
/// Missing fields fall back to [`ManagerConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Capacity reserved up front for the history stack
    pub initial_capacity: usize,
    /// Emit a debug entry before each undo attempt
    pub trace_undo: bool,
    /// `log` target used when the manager builds its own FacadeLogger
    pub log_target: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            trace_undo: true,
            log_target: DEFAULT_TARGET.to_string(),
        }
    }
}

impl ManagerConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from disk; `.json` files are parsed as JSON, everything else as RON
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&text),
            _ => Self::from_ron_str(&text),
        }
    }
}
