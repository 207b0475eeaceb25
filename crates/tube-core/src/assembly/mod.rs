//! Ordered chain of segments plus the current selection

mod chain;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::segment::Segment;
use crate::types::DimensionError;

/// Assembly-related errors
///
/// None of these are fatal; they report that an operation had no effect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssemblyError {
    #[error("Segment not found: {0}")]
    SegmentNotFound(Uuid),

    #[error("No segment is selected")]
    NothingSelected,

    #[error("Invalid tube dimensions: {0}")]
    InvalidDimensions(#[from] DimensionError),

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,
}

/// Chain of segments in joint order
///
/// Segment `i` was placed against segment `i - 1` when it was added; later
/// drags may move it away. At most one segment is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    segments: Vec<Segment>,
    selected: Option<Uuid>,
}

impl Assembly {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an assembly from segments in chain order, with nothing selected
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            selected: None,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Position of a segment in the chain
    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.segments.iter().position(|s| s.id() == id)
    }

    /// Last segment of the chain, the predecessor of the next one added
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn selected_segment(&self) -> Option<&Segment> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected == Some(id)
    }
}
