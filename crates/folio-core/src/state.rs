//! Camera types and pointer-to-world mapping shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs so the
//! mapping math stays testable on the host.

use crate::constants::{BG_CAMERA_FOVY_DEG, BG_CAMERA_Z, TUBE_CAMERA_FOVY_DEG, TUBE_CAMERA_Z};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    fn fixed(z: f32, fovy_deg: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_deg.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Background scene camera.
    pub fn background(aspect: f32) -> Self {
        Self::fixed(BG_CAMERA_Z, BG_CAMERA_FOVY_DEG, aspect)
    }

    /// Tube overlay camera, slightly closer with a wider field of view.
    pub fn tube_overlay(aspect: f32) -> Self {
        Self::fixed(TUBE_CAMERA_Z, TUBE_CAMERA_FOVY_DEG, aspect)
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World-space width/height of the z = 0 plane as seen by this camera.
    pub fn viewport_extent(&self) -> Vec2 {
        let dist = self.eye.z;
        let h = 2.0 * dist * (self.fovy_radians * 0.5).tan();
        Vec2::new(h * self.aspect, h)
    }
}

/// Map pointer NDC (`-1..1`, y up) to a world position on the z = 0 plane.
pub fn pointer_to_world(ndc: Vec2, camera: &Camera) -> Vec3 {
    let extent = camera.viewport_extent();
    Vec3::new(ndc.x * extent.x * 0.5, ndc.y * extent.y * 0.5, 0.0)
}
