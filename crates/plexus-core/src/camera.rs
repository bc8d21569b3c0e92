//! Camera that drifts towards a target derived from the pointer and scroll.
//!
//! The rig never jumps: every tick closes a fixed fraction of the gap
//! between the current position and the target (exponential smoothing).

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Pointer offset from the viewport centre, scaled into mouse units.
#[inline]
pub fn pointer_to_mouse(
    client_x: f32,
    client_y: f32,
    half_width: f32,
    half_height: f32,
) -> [f32; 2] {
    [
        (client_x - half_width) * POINTER_SCALE,
        (client_y - half_height) * POINTER_SCALE,
    ]
}

#[derive(Clone, Debug)]
pub struct CameraRig {
    pub position: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, CAMERA_BASE_Y, CAMERA_Z),
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Where the camera is heading for the given mouse and scroll state.
    #[inline]
    pub fn target(mouse: [f32; 2], scroll: f32) -> Vec3 {
        Vec3::new(
            mouse[0] * CAMERA_POINTER_GAIN,
            -mouse[1] * CAMERA_POINTER_GAIN + CAMERA_BASE_Y - scroll * CAMERA_SCROLL_GAIN,
            CAMERA_Z,
        )
    }

    #[inline]
    pub fn look_at_point(scroll: f32) -> Vec3 {
        Vec3::new(0.0, -scroll * CAMERA_SCROLL_GAIN, 0.0)
    }

    /// One smoothing tick towards the target.
    pub fn step(&mut self, mouse: [f32; 2], scroll: f32) {
        let target = Self::target(mouse, scroll);
        self.position.x += (target.x - self.position.x) * CAMERA_SMOOTHING;
        self.position.y += (target.y - self.position.y) * CAMERA_SMOOTHING;
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self, scroll: f32) -> Mat4 {
        Mat4::look_at_rh(self.position, Self::look_at_point(scroll), Vec3::Y)
    }

    pub fn view_projection(&self, scroll: f32) -> Mat4 {
        self.projection_matrix() * self.view_matrix(scroll)
    }
}
