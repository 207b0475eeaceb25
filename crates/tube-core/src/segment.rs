//! Segment definition

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{DimensionError, Pose, TubeDimensions};

/// Raw parameters for the next segment, as entered in the editor form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentParams {
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
    pub length: f32,
    /// Joint angle to the previous segment, in degrees
    pub angle_degrees: f32,
    /// Round the joint angle to the nearest snap angle
    pub snap: bool,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 30.0,
            thickness: 3.0,
            length: 100.0,
            angle_degrees: 0.0,
            snap: false,
        }
    }
}

impl SegmentParams {
    /// Validate the shape part of the parameters
    pub fn dimensions(&self) -> Result<TubeDimensions, DimensionError> {
        TubeDimensions::new(self.width, self.height, self.thickness, self.length)
    }
}

/// One rigid tube in the chain
///
/// The shape is fixed at creation; only the pose changes afterwards.
/// `Clone` yields a fully independent copy with the same `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    id: Uuid,
    dimensions: TubeDimensions,
    pub pose: Pose,
}

impl Segment {
    /// Create a segment with a fresh id
    pub fn new(dimensions: TubeDimensions, pose: Pose) -> Self {
        Self::with_id(Uuid::new_v4(), dimensions, pose)
    }

    /// Create a segment with a known id (used when rebuilding from snapshots)
    pub fn with_id(id: Uuid, dimensions: TubeDimensions, pose: Pose) -> Self {
        Self {
            id,
            dimensions,
            pose,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn dimensions(&self) -> &TubeDimensions {
        &self.dimensions
    }

    pub fn length(&self) -> f32 {
        self.dimensions.length()
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position()
    }

    /// Center of the face the segment starts from
    pub fn start_face(&self) -> Vec3 {
        self.position() - self.pose.forward() * self.dimensions.half_length()
    }

    /// Center of the face the next segment attaches to
    pub fn end_face(&self) -> Vec3 {
        self.position() + self.pose.forward() * self.dimensions.half_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> TubeDimensions {
        TubeDimensions::new(50.0, 30.0, 3.0, 100.0).unwrap()
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Segment::new(dims(), Pose::IDENTITY);
        let b = Segment::new(dims(), Pose::IDENTITY);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Segment::new(dims(), Pose::IDENTITY);
        let mut copy = original.clone();
        copy.pose.set_position(Vec3::new(10.0, 0.0, 0.0));

        assert_eq!(copy.id(), original.id());
        assert_eq!(original.position(), Vec3::ZERO);
        assert_eq!(copy.position(), Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_faces_at_identity() {
        let segment = Segment::new(dims(), Pose::IDENTITY);
        assert_eq!(segment.start_face(), Vec3::new(-50.0, 0.0, 0.0));
        assert_eq!(segment.end_face(), Vec3::new(50.0, 0.0, 0.0));
    }

    #[test]
    fn test_default_params_are_valid() {
        assert!(SegmentParams::default().dimensions().is_ok());

        let params = SegmentParams {
            thickness: 20.0,
            ..Default::default()
        };
        assert!(params.dimensions().is_err());
    }
}
