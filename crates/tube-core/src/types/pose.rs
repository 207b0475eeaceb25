//! Pose type definition

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Pose (position and orientation) of a segment in world space
///
/// Rotation is stored as Euler angles in radians, applied X then Y then Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub xyz: [f32; 3],
    pub rpy: [f32; 3], // roll, pitch, yaw in radians
}

impl Pose {
    /// Pose at the world origin with no rotation
    pub const IDENTITY: Pose = Pose {
        xyz: [0.0; 3],
        rpy: [0.0; 3],
    };

    pub fn new(xyz: [f32; 3], rpy: [f32; 3]) -> Self {
        Self { xyz, rpy }
    }

    pub fn from_position(xyz: [f32; 3]) -> Self {
        Self { xyz, rpy: [0.0; 3] }
    }

    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.to_quat(), self.position())
    }

    /// Convert to quaternion representation
    pub fn to_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rpy[0], self.rpy[1], self.rpy[2])
    }

    /// Get position as Vec3
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.xyz)
    }

    /// Get rotation as Vec3 of Euler angles
    pub fn rotation(&self) -> Vec3 {
        Vec3::from(self.rpy)
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.xyz = position.to_array();
    }

    /// Rotation about the Z axis
    pub fn yaw(&self) -> f32 {
        self.rpy[2]
    }

    /// Copy of this pose with `delta` radians added to the yaw component
    pub fn rotated_yaw(&self, delta: f32) -> Self {
        Self {
            xyz: self.xyz,
            rpy: [self.rpy[0], self.rpy[1], self.rpy[2] + delta],
        }
    }

    /// Local forward axis (+X) expressed in world space
    pub fn forward(&self) -> Vec3 {
        self.to_quat() * Vec3::X
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_forward_is_x() {
        assert_eq!(Pose::IDENTITY.forward(), Vec3::X);
    }

    #[test]
    fn test_yaw_turns_forward_towards_y() {
        let pose = Pose::IDENTITY.rotated_yaw(FRAC_PI_2);
        let forward = pose.forward();
        assert_relative_eq!(forward.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(forward.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(forward.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotated_yaw_keeps_position_and_other_axes() {
        let pose = Pose::new([1.0, 2.0, 3.0], [0.1, 0.2, 0.3]);
        let turned = pose.rotated_yaw(0.5);
        assert_eq!(turned.xyz, pose.xyz);
        assert_eq!(turned.rpy[0], 0.1);
        assert_eq!(turned.rpy[1], 0.2);
        assert_relative_eq!(turned.yaw(), 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_to_mat4_translates_origin() {
        let pose = Pose::from_position([4.0, 5.0, 6.0]);
        let origin = pose.to_mat4().transform_point3(Vec3::ZERO);
        assert_eq!(origin, Vec3::new(4.0, 5.0, 6.0));
    }
}
