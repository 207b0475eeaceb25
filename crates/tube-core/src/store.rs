//! Assembly store: the single source of truth for the live chain
//!
//! Every discrete mutation records one history snapshot. Drags update the
//! live pose through [`AssemblyStore::move_segment`] and record once through
//! [`AssemblyStore::commit`] when the gesture ends.

use glam::Vec3;
use uuid::Uuid;

use crate::assembly::{Assembly, AssemblyError};
use crate::history::{DEFAULT_HISTORY_CAPACITY, History};
use crate::observer::{AssemblyObserver, NullObserver};
use crate::placement::place_next;
use crate::segment::{Segment, SegmentParams};

/// Boxed observer held by the store
pub type BoxedObserver = Box<dyn AssemblyObserver + Send>;

/// Live assembly plus its undo history and change observer
pub struct AssemblyStore {
    assembly: Assembly,
    history: History,
    observer: BoxedObserver,
}

impl Default for AssemblyStore {
    fn default() -> Self {
        Self::new(Box::new(NullObserver))
    }
}

impl std::fmt::Debug for AssemblyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssemblyStore")
            .field("assembly", &self.assembly)
            .field("history_len", &self.history.len())
            .field("history_cursor", &self.history.cursor())
            .finish_non_exhaustive()
    }
}

impl AssemblyStore {
    pub fn new(observer: BoxedObserver) -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY, observer)
    }

    /// Create an empty store keeping at most `capacity` history entries
    pub fn with_capacity(capacity: usize, observer: BoxedObserver) -> Self {
        let assembly = Assembly::new();
        let mut history = History::new(capacity);
        history.record(&assembly, "Initial State");
        Self {
            assembly,
            history,
            observer,
        }
    }

    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Swap the observer, returning the previous one
    pub fn set_observer(&mut self, observer: BoxedObserver) -> BoxedObserver {
        std::mem::replace(&mut self.observer, observer)
    }

    /// Append a new segment joined to the end of the chain
    pub fn add_segment(&mut self, params: &SegmentParams) -> Result<Uuid, AssemblyError> {
        let dimensions = params.dimensions().inspect_err(|e| {
            tracing::warn!("Rejected segment parameters: {}", e);
        })?;

        let pose = place_next(
            self.assembly.last(),
            dimensions.length(),
            params.angle_degrees,
            params.snap,
        );
        let segment = Segment::new(dimensions, pose);
        let id = segment.id();

        self.assembly.push(segment);
        if let Some(added) = self.assembly.last() {
            self.observer.segment_added(added);
        }
        self.history.record(&self.assembly, "Add Segment");

        tracing::debug!("Added segment {} at {:?}", id, pose.xyz);
        Ok(id)
    }

    /// Remove a segment by id
    pub fn remove_segment(&mut self, id: Uuid) -> Result<(), AssemblyError> {
        let was_selected = self.assembly.is_selected(id);
        self.assembly.remove(id).inspect_err(|e| {
            tracing::debug!("Remove skipped: {}", e);
        })?;

        self.observer.segment_removed(id);
        if was_selected {
            self.observer.selection_changed(None);
        }
        self.history.record(&self.assembly, "Remove Segment");

        tracing::debug!("Removed segment {}", id);
        Ok(())
    }

    /// Remove the selected segment, returning its id
    pub fn remove_selected(&mut self) -> Result<Uuid, AssemblyError> {
        let id = self
            .assembly
            .selected()
            .ok_or(AssemblyError::NothingSelected)?;
        self.remove_segment(id)?;
        Ok(id)
    }

    /// Change the selection; an unknown id clears it
    pub fn select(&mut self, id: Option<Uuid>) -> Result<(), AssemblyError> {
        let previous = self.assembly.selected();
        let result = self.assembly.select(id);

        let current = self.assembly.selected();
        if current != previous {
            self.observer.selection_changed(current);
        }
        result
    }

    /// Remove everything and start a fresh history
    pub fn clear_all(&mut self) {
        self.history.clear();
        self.replace(Assembly::new());
        self.history.record(&self.assembly, "Clear Assembly");
        tracing::debug!("Cleared assembly");
    }

    /// Replace the whole assembly and start a fresh history, as after an import
    pub fn load(&mut self, assembly: Assembly, description: &str) {
        self.history.clear();
        self.replace(assembly);
        self.history.record(&self.assembly, description);
        tracing::debug!("Loaded {} segments", self.assembly.len());
    }

    /// Move a segment without recording history
    ///
    /// Call [`commit`](Self::commit) once the gesture is over.
    pub fn move_segment(&mut self, id: Uuid, position: Vec3) -> Result<(), AssemblyError> {
        let segment = self.assembly.set_position(id, position)?;
        let pose = segment.pose;
        self.observer.segment_pose_changed(id, &pose);
        Ok(())
    }

    /// Record the live state as one undo step
    pub fn commit(&mut self, description: &str) {
        self.history.record(&self.assembly, description);
    }

    /// Restore the previous snapshot
    pub fn undo(&mut self) -> Result<(), AssemblyError> {
        let entry = self.history.undo().ok_or(AssemblyError::NothingToUndo)?;
        let snapshot = entry.assembly.clone();
        self.replace(snapshot);
        tracing::debug!("Undo: {} segments", self.assembly.len());
        Ok(())
    }

    /// Reapply the next snapshot
    pub fn redo(&mut self) -> Result<(), AssemblyError> {
        let entry = self.history.redo().ok_or(AssemblyError::NothingToRedo)?;
        let snapshot = entry.assembly.clone();
        self.replace(snapshot);
        tracing::debug!("Redo: {} segments", self.assembly.len());
        Ok(())
    }

    fn replace(&mut self, assembly: Assembly) {
        self.assembly = assembly;
        self.observer.assembly_replaced(self.assembly.segments());
        self.observer.selection_changed(self.assembly.selected());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Added(Uuid),
        Removed(Uuid),
        Moved(Uuid),
        Selected(Option<Uuid>),
        Replaced(usize),
    }

    struct Recorder(Arc<Mutex<Vec<Event>>>);

    impl AssemblyObserver for Recorder {
        fn segment_added(&mut self, segment: &Segment) {
            self.0.lock().push(Event::Added(segment.id()));
        }
        fn segment_removed(&mut self, id: Uuid) {
            self.0.lock().push(Event::Removed(id));
        }
        fn segment_pose_changed(&mut self, id: Uuid, _pose: &crate::types::Pose) {
            self.0.lock().push(Event::Moved(id));
        }
        fn selection_changed(&mut self, selected: Option<Uuid>) {
            self.0.lock().push(Event::Selected(selected));
        }
        fn assembly_replaced(&mut self, segments: &[Segment]) {
            self.0.lock().push(Event::Replaced(segments.len()));
        }
    }

    fn recording_store() -> (AssemblyStore, Arc<Mutex<Vec<Event>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let store = AssemblyStore::new(Box::new(Recorder(events.clone())));
        (store, events)
    }

    #[test]
    fn test_add_records_history() {
        let mut store = AssemblyStore::default();
        assert_eq!(store.history().len(), 1);

        store.add_segment(&SegmentParams::default()).unwrap();
        store.add_segment(&SegmentParams::default()).unwrap();
        assert_eq!(store.assembly().len(), 2);
        assert_eq!(store.history().len(), 3);
        assert_eq!(store.history().cursor(), Some(2));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let (mut store, events) = recording_store();
        let params = SegmentParams {
            thickness: 40.0,
            ..Default::default()
        };
        assert!(matches!(
            store.add_segment(&params),
            Err(AssemblyError::InvalidDimensions(_))
        ));
        assert!(store.assembly().is_empty());
        assert_eq!(store.history().len(), 1);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_remove_notifies_and_records() {
        let (mut store, events) = recording_store();
        let id = store.add_segment(&SegmentParams::default()).unwrap();
        store.select(Some(id)).unwrap();
        events.lock().clear();

        store.remove_segment(id).unwrap();
        assert_eq!(
            *events.lock(),
            vec![Event::Removed(id), Event::Selected(None)]
        );
        assert_eq!(store.history().len(), 3);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = AssemblyStore::default();
        store.add_segment(&SegmentParams::default()).unwrap();
        let missing = Uuid::new_v4();
        assert_eq!(
            store.remove_segment(missing),
            Err(AssemblyError::SegmentNotFound(missing))
        );
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.assembly().len(), 1);
    }

    #[test]
    fn test_remove_selected() {
        let mut store = AssemblyStore::default();
        assert_eq!(store.remove_selected(), Err(AssemblyError::NothingSelected));

        let id = store.add_segment(&SegmentParams::default()).unwrap();
        store.select(Some(id)).unwrap();
        assert_eq!(store.remove_selected(), Ok(id));
        assert!(store.assembly().is_empty());
    }

    #[test]
    fn test_select_notifies_on_change_only() {
        let (mut store, events) = recording_store();
        let id = store.add_segment(&SegmentParams::default()).unwrap();
        events.lock().clear();

        store.select(Some(id)).unwrap();
        store.select(Some(id)).unwrap();
        assert!(store.select(Some(Uuid::new_v4())).is_err());
        assert_eq!(store.assembly().selected(), None);

        assert_eq!(
            *events.lock(),
            vec![Event::Selected(Some(id)), Event::Selected(None)]
        );
        // selection is not an undo step
        assert_eq!(store.history().len(), 2);
    }

    #[test]
    fn test_clear_resets_history() {
        let (mut store, events) = recording_store();
        store.add_segment(&SegmentParams::default()).unwrap();
        store.add_segment(&SegmentParams::default()).unwrap();
        events.lock().clear();

        store.clear_all();
        assert!(store.assembly().is_empty());
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.undo(), Err(AssemblyError::NothingToUndo));
        assert_eq!(events.lock()[0], Event::Replaced(0));
    }

    #[test]
    fn test_move_does_not_record() {
        let (mut store, events) = recording_store();
        let id = store.add_segment(&SegmentParams::default()).unwrap();
        events.lock().clear();

        for x in 0..10 {
            store.move_segment(id, Vec3::new(x as f32, 0.0, 0.0)).unwrap();
        }
        assert_eq!(store.history().len(), 2);
        assert_eq!(events.lock().len(), 10);
        assert!(events.lock().iter().all(|e| *e == Event::Moved(id)));

        store.commit("Move Segment");
        assert_eq!(store.history().len(), 3);
        assert_eq!(store.history().undo_description(), Some("Move Segment"));
    }

    #[test]
    fn test_undo_restores_and_notifies() {
        let (mut store, events) = recording_store();
        let first = store.add_segment(&SegmentParams::default()).unwrap();
        store.add_segment(&SegmentParams::default()).unwrap();
        events.lock().clear();

        store.undo().unwrap();
        assert_eq!(store.assembly().len(), 1);
        assert!(store.assembly().contains(first));
        assert_eq!(
            *events.lock(),
            vec![Event::Replaced(1), Event::Selected(None)]
        );

        store.undo().unwrap();
        assert!(store.assembly().is_empty());
        assert_eq!(store.undo(), Err(AssemblyError::NothingToUndo));

        store.redo().unwrap();
        store.redo().unwrap();
        assert_eq!(store.assembly().len(), 2);
        assert_eq!(store.redo(), Err(AssemblyError::NothingToRedo));
    }

    #[test]
    fn test_next_segment_uses_dragged_pose() {
        let mut store = AssemblyStore::default();
        let first = store.add_segment(&SegmentParams::default()).unwrap();
        store.move_segment(first, Vec3::new(0.0, 200.0, 0.0)).unwrap();
        store.commit("Move Segment");

        let second = store.add_segment(&SegmentParams::default()).unwrap();
        let pose = store.assembly().get(second).unwrap().pose;
        assert_eq!(pose.xyz, [100.0, 200.0, 0.0]);
    }

    #[test]
    fn test_load_replaces_and_resets() {
        let (mut store, events) = recording_store();
        store.add_segment(&SegmentParams::default()).unwrap();
        let mut other = AssemblyStore::default();
        other.add_segment(&SegmentParams::default()).unwrap();
        other.add_segment(&SegmentParams::default()).unwrap();
        events.lock().clear();

        store.load(other.assembly().clone(), "Import");
        assert_eq!(store.assembly().len(), 2);
        assert!(!store.history().can_undo());
        assert_eq!(events.lock()[0], Event::Replaced(2));
    }

    struct Snapshots(Arc<Mutex<Vec<Segment>>>);

    impl AssemblyObserver for Snapshots {
        fn segment_added(&mut self, segment: &Segment) {
            self.0.lock().push(segment.clone());
        }
    }

    #[test]
    fn test_added_notification_sees_stored_segment() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = AssemblyStore::new(Box::new(Snapshots(seen.clone())));

        let first = store.add_segment(&SegmentParams::default()).unwrap();
        let second = store
            .add_segment(&SegmentParams {
                angle_degrees: 90.0,
                ..Default::default()
            })
            .unwrap();

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].id(), first);
        assert_eq!(seen[1].id(), second);
        assert_eq!(Some(&seen[1]), store.assembly().last());
        assert_eq!(seen[0], store.assembly().segments()[0]);
    }
}
