//! Drag session state

use uuid::Uuid;

/// A segment held by the pointer between pointer-down and pointer-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Segment being dragged
    pub segment_id: Uuid,
    /// Whether any pointer move actually landed on the plane
    pub moved: bool,
}

impl DragSession {
    pub fn new(segment_id: Uuid) -> Self {
        Self {
            segment_id,
            moved: false,
        }
    }
}
