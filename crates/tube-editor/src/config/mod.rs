//! Application configuration module
//!
//! Default segment parameters, history depth, export location and drag plane.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tube_core::{DEFAULT_HISTORY_CAPACITY, SegmentParams};

/// Editor preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Form values used when the editor starts
    pub default_params: SegmentParams,
    /// Maximum number of undo steps kept
    pub history_capacity: usize,
    /// Where exports are written; the working directory when unset
    pub export_dir: Option<PathBuf>,
    /// Height of the horizontal plane segments are dragged on
    pub drag_plane_height: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_params: SegmentParams::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            export_dir: None,
            drag_plane_height: 0.0,
        }
    }
}

impl EditorConfig {
    /// Directory exports go to
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
