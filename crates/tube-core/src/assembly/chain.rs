//! Chain mutations for Assembly (append, remove, select, move)

use glam::Vec3;
use uuid::Uuid;

use super::{Assembly, AssemblyError};
use crate::segment::Segment;

impl Assembly {
    /// Append a segment to the end of the chain
    pub fn push(&mut self, segment: Segment) -> Uuid {
        let id = segment.id();
        self.segments.push(segment);
        id
    }

    /// Remove a segment, clearing the selection if it pointed at it
    pub fn remove(&mut self, id: Uuid) -> Result<Segment, AssemblyError> {
        let index = self
            .index_of(id)
            .ok_or(AssemblyError::SegmentNotFound(id))?;

        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(self.segments.remove(index))
    }

    /// Set the selection
    ///
    /// An unknown id clears the selection and reports the miss.
    pub fn select(&mut self, id: Option<Uuid>) -> Result<(), AssemblyError> {
        match id {
            Some(id) if !self.contains(id) => {
                self.selected = None;
                Err(AssemblyError::SegmentNotFound(id))
            }
            _ => {
                self.selected = id;
                Ok(())
            }
        }
    }

    /// Move a segment without touching its rotation
    pub fn set_position(&mut self, id: Uuid, position: Vec3) -> Result<&Segment, AssemblyError> {
        let segment = self
            .segments
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(AssemblyError::SegmentNotFound(id))?;
        segment.pose.set_position(position);
        Ok(segment)
    }

    /// Remove every segment and clear the selection
    pub fn clear(&mut self) {
        self.segments.clear();
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Pose, TubeDimensions};

    fn segment() -> Segment {
        Segment::new(
            TubeDimensions::new(40.0, 40.0, 2.0, 100.0).unwrap(),
            Pose::IDENTITY,
        )
    }

    #[test]
    fn test_push_keeps_order() {
        let mut assembly = Assembly::new();
        let a = assembly.push(segment());
        let b = assembly.push(segment());
        assert_eq!(assembly.len(), 2);
        assert_eq!(assembly.index_of(a), Some(0));
        assert_eq!(assembly.index_of(b), Some(1));
        assert_eq!(assembly.last().map(Segment::id), Some(b));
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut assembly = Assembly::new();
        let a = assembly.push(segment());
        let b = assembly.push(segment());
        assembly.select(Some(b)).unwrap();

        assembly.remove(a).unwrap();
        assert_eq!(assembly.selected(), Some(b));

        assembly.remove(b).unwrap();
        assert_eq!(assembly.selected(), None);
        assert!(assembly.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut assembly = Assembly::new();
        assembly.push(segment());
        let missing = Uuid::new_v4();
        assert_eq!(
            assembly.remove(missing),
            Err(AssemblyError::SegmentNotFound(missing))
        );
        assert_eq!(assembly.len(), 1);
    }

    #[test]
    fn test_select_unknown_clears() {
        let mut assembly = Assembly::new();
        let a = assembly.push(segment());
        assembly.select(Some(a)).unwrap();
        assert!(assembly.is_selected(a));

        assert!(assembly.select(Some(Uuid::new_v4())).is_err());
        assert_eq!(assembly.selected(), None);
    }

    #[test]
    fn test_set_position_keeps_rotation() {
        let mut assembly = Assembly::new();
        let mut rotated = segment();
        rotated.pose.rpy = [0.0, 0.0, 1.0];
        let id = assembly.push(rotated);

        let moved = assembly.set_position(id, Vec3::new(3.0, 4.0, 0.0)).unwrap();
        assert_eq!(moved.position(), Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(moved.pose.rpy, [0.0, 0.0, 1.0]);
    }
}
