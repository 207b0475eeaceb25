//! Undo/Redo action handling

use crate::state::AppState;

use super::{ActionError, AppAction};

impl AppAction {
    /// Check if this action adds an entry to the undo history
    pub fn is_undoable(&self) -> bool {
        match self {
            // Selection and view changes are not undoable (UX preference)
            AppAction::Select(_) | AppAction::SetParams(_) | AppAction::SetCamera(_) => false,

            // Intermediate drag events; the drag is recorded on pointer-up
            AppAction::PointerDown { .. } | AppAction::PointerMove { .. } => false,

            // Operations that reset history or leave the assembly untouched
            AppAction::ClearAll | AppAction::Import { .. } | AppAction::Export { .. } => false,

            // Undo/Redo themselves are not undoable (prevent infinite loop)
            AppAction::Undo | AppAction::Redo => false,

            // All other actions are undoable
            AppAction::AddSegment
            | AppAction::RemoveSegment(_)
            | AppAction::RemoveSelected
            | AppAction::PointerUp => true,
        }
    }

    /// Get a description of the action for display
    pub fn description(&self) -> &'static str {
        match self {
            AppAction::SetParams(_) => "Set Parameters",
            AppAction::SetCamera(_) => "Move Camera",
            AppAction::AddSegment => "Add Segment",
            AppAction::RemoveSegment(_) | AppAction::RemoveSelected => "Remove Segment",
            AppAction::Select(_) => "Select Segment",
            AppAction::ClearAll => "Clear Assembly",
            AppAction::PointerDown { .. } => "Grab Segment",
            AppAction::PointerMove { .. } => "Drag Segment",
            AppAction::PointerUp => "Move Segment",
            AppAction::Export { .. } => "Export",
            AppAction::Import { .. } => "Import",
            AppAction::Undo => "Undo",
            AppAction::Redo => "Redo",
        }
    }
}

/// Handle the Undo action
pub(super) fn handle_undo(state: &mut AppState) -> Result<(), ActionError> {
    // The dragged segment may not exist in the restored state
    settle_drag(state);
    let description = state.store.history().undo_description().map(str::to_owned);
    state.store.undo()?;
    tracing::debug!("Undo: {}", description.unwrap_or_default());
    Ok(())
}

/// Handle the Redo action
pub(super) fn handle_redo(state: &mut AppState) -> Result<(), ActionError> {
    settle_drag(state);
    let description = state.store.history().redo_description().map(str::to_owned);
    state.store.redo()?;
    tracing::debug!("Redo: {}", description.unwrap_or_default());
    Ok(())
}

/// End any drag in progress, recording it first if it moved a segment
///
/// An undo issued mid-drag then reverts exactly that drag.
fn settle_drag(state: &mut AppState) {
    if let Some(session) = state.drag.take()
        && session.moved
    {
        state.store.commit("Move Segment");
        tracing::debug!("Drag on {} committed before history step", session.segment_id);
    }
}
