//! Camera rays and drag projection onto the reference plane

use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Rays closer to parallel than this never hit the plane
const PARALLEL_EPSILON: f32 = 1e-6;

/// Camera projection mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    Perspective,
    Orthographic { half_height: f32 },
}

/// Camera state needed to turn pointer positions into world rays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(300.0, -300.0, 300.0),
            target: Vec3::ZERO,
            up: Vec3::Z,
            fov_y: 45.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 10_000.0,
            projection: Projection::Perspective,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective => {
                Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
            }
            Projection::Orthographic { half_height } => {
                let half_width = half_height * self.aspect;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Build a world-space ray through normalized device coordinates
    ///
    /// `ndc` is in [-1, 1] on both axes, +Y up.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray> {
        if !ndc.is_finite() {
            return None;
        }

        let inv_view_proj = (self.projection_matrix() * self.view_matrix()).inverse();
        let near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        if near.w.abs() < f32::EPSILON || far.w.abs() < f32::EPSILON {
            return None;
        }

        let origin = near.truncate() / near.w;
        let direction = (far.truncate() / far.w - origin).normalize_or_zero();
        if direction == Vec3::ZERO || !origin.is_finite() {
            return None;
        }

        Some(Ray { origin, direction })
    }
}

/// Half-line in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Plane that dragged segments move on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePlane {
    pub origin: Vec3,
    pub normal: Vec3,
}

impl Default for ReferencePlane {
    fn default() -> Self {
        Self::horizontal(0.0)
    }
}

impl ReferencePlane {
    /// Horizontal plane at height `z`, normal pointing up
    pub fn horizontal(z: f32) -> Self {
        Self {
            origin: Vec3::new(0.0, 0.0, z),
            normal: Vec3::Z,
        }
    }

    /// Ray parameter of the intersection, if the ray hits the plane in front of its origin
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None; // Ray is parallel to the plane
        }

        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        if t < 0.0 {
            return None; // Intersection is behind the camera
        }
        Some(t)
    }
}

/// Maps pointer positions to points on the reference plane
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragProjector {
    pub plane: ReferencePlane,
}

impl DragProjector {
    pub fn new(plane: ReferencePlane) -> Self {
        Self { plane }
    }

    /// Project a pointer position onto the plane
    ///
    /// `None` means this pointer event should not move anything.
    pub fn project(&self, ndc: Vec2, camera: &Camera) -> Option<Vec3> {
        let ray = camera.ray_from_ndc(ndc)?;
        let t = self.plane.intersect(&ray)?;
        Some(ray.at(t))
    }
}
