//! Application actions and their dispatch
//!
//! Host UIs translate input events into [`AppAction`]s and hand them to
//! [`dispatch`]. Every action runs to completion under one lock.

mod file;
mod history;
mod pointer;

pub use file::{export_to_dir, import_from_path};

use std::path::PathBuf;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tube_core::{Assembly, AssemblyError, Camera, ExportError, SegmentParams};
use uuid::Uuid;

use crate::state::{AppState, SharedAppState};

/// Errors reported by actions
///
/// These describe why an action had no effect; none leaves the state
/// inconsistent.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No segment at index {0}")]
    IndexOutOfRange(usize),
}

/// A way to name a segment from outside the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentRef {
    /// By identifier
    Id(Uuid),
    /// By position in the chain
    Index(usize),
}

impl SegmentRef {
    fn resolve(self, assembly: &Assembly) -> Result<Uuid, ActionError> {
        match self {
            SegmentRef::Id(id) => Ok(id),
            SegmentRef::Index(index) => assembly
                .segments()
                .get(index)
                .map(|s| s.id())
                .ok_or(ActionError::IndexOutOfRange(index)),
        }
    }
}

impl From<Uuid> for SegmentRef {
    fn from(id: Uuid) -> Self {
        SegmentRef::Id(id)
    }
}

/// Input to the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppAction {
    // Form actions
    SetParams(SegmentParams),
    SetCamera(Camera),

    // Assembly actions
    AddSegment,
    RemoveSegment(SegmentRef),
    RemoveSelected,
    Select(Option<SegmentRef>),
    ClearAll,

    // Pointer actions, coordinates in normalized device space
    PointerDown { hit: Option<SegmentRef> },
    PointerMove { ndc: [f32; 2] },
    PointerUp,

    // File actions
    Export { dir: Option<PathBuf> },
    Import { path: PathBuf },

    // History actions
    Undo,
    Redo,
}

/// Context handed to action handlers
pub struct ActionContext {
    pub app_state: SharedAppState,
}

impl ActionContext {
    pub fn new(app_state: SharedAppState) -> Self {
        Self { app_state }
    }
}

/// Apply one action to the editor state
pub fn dispatch(ctx: &ActionContext, action: AppAction) -> Result<(), ActionError> {
    tracing::debug!("Action: {}", action.description());
    let mut state = ctx.app_state.lock();
    let marks_modified = match action {
        AppAction::PointerUp => state.drag.is_some_and(|d| d.moved),
        AppAction::Undo | AppAction::Redo | AppAction::ClearAll | AppAction::Import { .. } => {
            true
        }
        _ => action.is_undoable(),
    };

    apply(&mut state, action)?;

    if marks_modified {
        state.modified = true;
    }
    Ok(())
}

fn apply(state: &mut AppState, action: AppAction) -> Result<(), ActionError> {
    match action {
        AppAction::SetParams(params) => {
            state.params = params;
            Ok(())
        }
        AppAction::SetCamera(camera) => {
            state.camera = camera;
            Ok(())
        }
        AppAction::AddSegment => {
            let params = state.params;
            state.store.add_segment(&params)?;
            Ok(())
        }
        AppAction::RemoveSegment(target) => {
            let id = target.resolve(state.store.assembly())?;
            state.store.remove_segment(id)?;
            end_drag_on(state, id);
            Ok(())
        }
        AppAction::RemoveSelected => {
            let id = state.store.remove_selected()?;
            end_drag_on(state, id);
            Ok(())
        }
        AppAction::Select(target) => handle_select(state, target),
        AppAction::ClearAll => {
            state.drag = None;
            state.store.clear_all();
            Ok(())
        }
        AppAction::PointerDown { hit } => pointer::handle_pointer_down(state, hit),
        AppAction::PointerMove { ndc } => pointer::handle_pointer_move(state, Vec2::from(ndc)),
        AppAction::PointerUp => {
            pointer::handle_pointer_up(state);
            Ok(())
        }
        AppAction::Export { dir } => {
            let dir = dir.unwrap_or_else(|| state.export_dir.clone());
            export_to_dir(state, &dir)?;
            Ok(())
        }
        AppAction::Import { path } => import_from_path(state, &path),
        AppAction::Undo => history::handle_undo(state),
        AppAction::Redo => history::handle_redo(state),
    }
}

/// Drop the drag session if it holds a segment that no longer exists
fn end_drag_on(state: &mut AppState, removed: Uuid) {
    if state.drag.is_some_and(|d| d.segment_id == removed) {
        state.drag = None;
        tracing::debug!("Drag on {} ended by removal", removed);
    }
}

fn handle_select(state: &mut AppState, target: Option<SegmentRef>) -> Result<(), ActionError> {
    let id = match target.map(|t| t.resolve(state.store.assembly())).transpose() {
        Ok(id) => id,
        Err(e) => {
            // Unknown targets clear the selection
            state.store.select(None)?;
            return Err(e);
        }
    };
    state.store.select(id)?;
    Ok(())
}
