//! Pointer-driven repositioning
//!
//! Pointer-down grabs a segment, each move translates it onto the drag
//! plane, and pointer-up records a single undo step for the whole gesture.

use glam::Vec2;

use crate::state::{AppState, DragSession};

use super::{ActionError, SegmentRef};

pub(super) fn handle_pointer_down(
    state: &mut AppState,
    hit: Option<SegmentRef>,
) -> Result<(), ActionError> {
    state.drag = None;

    let Some(hit) = hit else {
        state.store.select(None)?;
        return Ok(());
    };

    let id = match hit.resolve(state.store.assembly()) {
        Ok(id) => id,
        Err(e) => {
            state.store.select(None)?;
            return Err(e);
        }
    };

    state.store.select(Some(id))?;
    state.drag = Some(DragSession::new(id));
    tracing::debug!("Drag started on {}", id);
    Ok(())
}

pub(super) fn handle_pointer_move(state: &mut AppState, ndc: Vec2) -> Result<(), ActionError> {
    let Some(session) = state.drag else {
        return Ok(());
    };

    // A miss leaves the segment where it is for this frame
    let Some(point) = state.projector.project(ndc, &state.camera) else {
        return Ok(());
    };

    state.store.move_segment(session.segment_id, point)?;
    if let Some(drag) = state.drag.as_mut() {
        drag.moved = true;
    }
    Ok(())
}

pub(super) fn handle_pointer_up(state: &mut AppState) {
    // The session always ends here, whatever happened during the drag
    let Some(session) = state.drag.take() else {
        return;
    };

    if session.moved {
        state.store.commit("Move Segment");
        tracing::debug!("Drag finished on {}", session.segment_id);
    } else {
        tracing::debug!("Drag on {} ended without movement", session.segment_id);
    }
}
