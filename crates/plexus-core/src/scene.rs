//! Backdrop context: the lattice, the camera rig and the rolling input state
//! they react to. Input arrives as discrete events; the frame step reads the
//! latest values, so the last write before a frame wins.

use crate::animator::{animation_time, lattice_yaw};
use crate::camera::{pointer_to_mouse, CameraRig};
use crate::constants::*;
use crate::lattice::Lattice;
use crate::params::{ConfigError, SceneParams};
use glam::Mat4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved { client_x: f32, client_y: f32 },
    Scrolled { offset_y: f32 },
    Resized { width: f32, height: f32 },
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub line_color: [f32; 4],
    /// rgb = fog colour, w = exp2 density
    pub fog: [f32; 4],
    pub viewport: [f32; 2],
    pub point_size: f32,
    pub _pad: f32,
}

pub struct Backdrop {
    lattice: Lattice,
    camera: CameraRig,
    mouse: [f32; 2],
    scroll: f32,
    half_width: f32,
    half_height: f32,
    time: f32,
}

impl Backdrop {
    pub fn new(params: &SceneParams, width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::EmptyViewport { width, height });
        }
        let lattice = Lattice::build(params)?;
        Ok(Self {
            lattice,
            camera: CameraRig::new(width / height),
            mouse: [0.0, 0.0],
            scroll: 0.0,
            half_width: width / 2.0,
            half_height: height / 2.0,
            time: 0.0,
        })
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { client_x, client_y } => {
                self.mouse =
                    pointer_to_mouse(client_x, client_y, self.half_width, self.half_height);
            }
            InputEvent::Scrolled { offset_y } => {
                self.scroll = offset_y;
            }
            InputEvent::Resized { width, height } => {
                self.half_width = width / 2.0;
                self.half_height = height / 2.0;
                self.camera.set_aspect(width, height);
            }
        }
    }

    /// Advance the lattice and camera to `elapsed_ms` since start.
    pub fn frame(&mut self, elapsed_ms: f64) {
        self.time = animation_time(elapsed_ms);
        self.lattice.animate(self.time, self.scroll);
        self.camera.step(self.mouse, self.scroll);
    }

    /// Uniforms for the current state; `surface_px` is the drawing buffer size.
    pub fn uniforms(&self, surface_px: [f32; 2]) -> SceneUniforms {
        let model = Mat4::from_rotation_y(lattice_yaw(self.time, self.scroll));
        SceneUniforms {
            view_proj: self.camera.view_projection(self.scroll).to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            line_color: [LINE_COLOR[0], LINE_COLOR[1], LINE_COLOR[2], 1.0],
            fog: [FOG_COLOR[0], FOG_COLOR[1], FOG_COLOR[2], FOG_DENSITY],
            viewport: surface_px,
            point_size: POINT_SIZE,
            _pad: 0.0,
        }
    }

    #[inline]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    #[inline]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    #[inline]
    pub fn mouse(&self) -> [f32; 2] {
        self.mouse
    }

    #[inline]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }
}

/// Host-side copy of the shader's exp2 fog curve, for tests and diagnostics.
#[inline]
pub fn fog_factor(depth: f32, density: f32) -> f32 {
    let d = density * depth;
    (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
}
