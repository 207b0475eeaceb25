//! Change notifications for the render layer
//!
//! The store calls these after each mutation; it never queries back.

use uuid::Uuid;

use crate::segment::Segment;
use crate::types::Pose;

/// Receiver of assembly changes, typically the layer that owns segment visuals
///
/// All methods default to doing nothing so implementors only handle what
/// they draw.
pub trait AssemblyObserver {
    /// A segment was appended to the chain.
    fn segment_added(&mut self, _segment: &Segment) {}

    /// A segment was removed from the chain.
    fn segment_removed(&mut self, _id: Uuid) {}

    /// A segment's position or rotation changed.
    fn segment_pose_changed(&mut self, _id: Uuid, _pose: &Pose) {}

    /// The selection moved to another segment, or was cleared.
    fn selection_changed(&mut self, _selected: Option<Uuid>) {}

    /// Every existing visual is stale; rebuild from `segments`.
    ///
    /// Sent after undo, redo, clear and import.
    fn assembly_replaced(&mut self, _segments: &[Segment]) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl AssemblyObserver for NullObserver {}
