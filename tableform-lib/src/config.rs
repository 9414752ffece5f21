//! Render configuration

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Id of the container element the form is attached to by default.
pub const DEFAULT_CONTAINER_ID: &str = "form";

/// Settings for rendering and attaching a form.
///
/// # Example
///
/// ```
/// use tableform_lib::RenderConfig;
///
/// let config = RenderConfig::default().with_container_id("contact");
/// assert!(config.escape);
///
/// let legacy = RenderConfig::verbatim();
/// assert!(!legacy.escape);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Id of the element whose content is replaced by the form.
    ///
    /// Default: `"form"`
    pub container_id: String,

    /// Escape names, labels, placeholders and option text.
    ///
    /// Default: `true`
    pub escape: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            escape: true,
        }
    }
}

impl RenderConfig {
    /// Creates a new render config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the container id.
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    /// Enables or disables escaping.
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Reads a config from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Creates a config that inserts text without escaping.
    pub fn verbatim() -> Self {
        Self {
            escape: false,
            ..Self::default()
        }
    }
}
