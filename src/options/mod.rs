//! View-control options with TOML preset support.
//!
//! Construction-time settings (camera placement, zoom sensitivity) are
//! consolidated here. All sub-structs use `#[serde(default)]` so partial
//! TOML files (e.g. only overriding `zoom_speed`) work correctly.

mod camera;

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use camera::CameraOptions;

use crate::error::ArcviewError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera placement and control parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ArcviewError> {
        let content = std::fs::read_to_string(path).map_err(ArcviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ArcviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ArcviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArcviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArcviewError::Io)?;
        }
        std::fs::write(path, content).map_err(ArcviewError::Io)
    }
}
