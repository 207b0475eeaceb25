//! Tube Assembly Editor
//!
//! Interaction layer over `tube-core`: editor state, input actions,
//! configuration, and a headless script runner.

pub mod actions;
pub mod config;
pub mod runner;
pub mod state;

pub use actions::{ActionContext, ActionError, AppAction, SegmentRef, dispatch};
pub use config::{AppConfig, ConfigManager, EditorConfig, SharedConfig};
pub use state::{AppState, DragSession, SharedAppState};
