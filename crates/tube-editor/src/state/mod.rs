//! Application state types

mod drag;

pub use drag::DragSession;

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tube_core::{
    AssemblyStore, BoxedObserver, Camera, DragProjector, NullObserver, ReferencePlane,
    SegmentParams,
};

use crate::config::EditorConfig;

/// Shared application state type
pub type SharedAppState = Arc<Mutex<AppState>>;

/// Everything the editor tracks between input events
pub struct AppState {
    /// Live assembly and its history
    pub store: AssemblyStore,
    /// Parameters for the next segment, as set by the form controls
    pub params: SegmentParams,
    /// Camera used to turn pointer positions into rays
    pub camera: Camera,
    /// Plane dragged segments move on
    pub projector: DragProjector,
    /// Segment currently being dragged
    pub drag: Option<DragSession>,
    /// Where exports are written
    pub export_dir: PathBuf,
    /// Whether the assembly changed since the last export
    pub modified: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&EditorConfig::default(), Box::new(NullObserver))
    }
}

impl AppState {
    /// Create the editor state from configuration
    pub fn new(config: &EditorConfig, observer: BoxedObserver) -> Self {
        Self {
            store: AssemblyStore::with_capacity(config.history_capacity, observer),
            params: config.default_params,
            camera: Camera::default(),
            projector: DragProjector::new(ReferencePlane::horizontal(config.drag_plane_height)),
            drag: None,
            export_dir: config.export_dir(),
            modified: false,
        }
    }

    /// Wrap into a shared handle
    pub fn into_shared(self) -> SharedAppState {
        Arc::new(Mutex::new(self))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
