//! Joint placement: deriving a new segment's pose from its predecessor
//!
//! Every joint is a rotation about the world Z axis. The new segment is
//! rotated first and then offset along its own forward axis, so it extends
//! away from the joint instead of swinging back into the predecessor.

use crate::segment::Segment;
use crate::types::Pose;

/// Canonical joint angles in degrees, ascending
pub const SNAP_ANGLES: [f32; 9] = [0.0, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 180.0];

/// Round an angle to the nearest snap angle
///
/// Exact midpoints resolve to the lower candidate, the first one met in
/// ascending order. Non-finite input is treated as 0.
pub fn snap_angle(angle_degrees: f32) -> f32 {
    let angle = finite_or_zero(angle_degrees);

    let mut best = SNAP_ANGLES[0];
    let mut best_distance = (angle - best).abs();
    for &candidate in &SNAP_ANGLES[1..] {
        let distance = (angle - candidate).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Resolve the joint angle actually applied, in degrees
pub fn effective_angle(angle_degrees: f32, snap: bool) -> f32 {
    if snap {
        snap_angle(angle_degrees)
    } else {
        finite_or_zero(angle_degrees)
    }
}

/// Compute the pose of a segment of `length` appended after `predecessor`
///
/// The first segment of a chain sits at the origin with no rotation.
pub fn place_next(predecessor: Option<&Segment>, length: f32, angle_degrees: f32, snap: bool) -> Pose {
    let Some(previous) = predecessor else {
        return Pose::IDENTITY;
    };

    let angle = effective_angle(angle_degrees, snap).to_radians();

    // Rotate first, then offset along the new forward axis
    let mut pose = previous.pose.rotated_yaw(angle);
    let joint = previous.end_face();
    pose.set_position(joint + pose.forward() * (length / 2.0));
    pose
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}
