//! Background lattice: jittered grid points plus the segments joining every
//! pair of points that sit closer than the connect distance.
//!
//! The lattice owns the draw buffers the renderer uploads each frame. Point
//! `i` lives at `point_vertices[i]`; segment `s` owns `line_vertices[2s]` and
//! `line_vertices[2s + 1]`. Both buffers are sized once at build time.

use crate::constants::*;
use crate::params::{ConfigError, SceneParams};
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub alpha: f32,
}

#[derive(Clone, Debug)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Height at creation; the animator offsets from here every frame.
    pub original_y: f32,
    pub brightness: f32,
    pub segments: SmallVec<[u32; 16]>,
}

impl Point {
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub a: u32,
    pub b: u32,
    pub base_opacity: f32,
}

pub struct Lattice {
    pub(crate) points: Vec<Point>,
    pub(crate) segments: Vec<Segment>,
    pub(crate) point_vertices: Vec<PointVertex>,
    pub(crate) line_vertices: Vec<LineVertex>,
}

impl Lattice {
    /// Place the jittered grid described by `params` and connect it.
    pub fn build(params: &SceneParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(params.seed);
        let positions = grid_positions(params, &mut rng);
        let lattice = Self::connect(positions, params.connect_distance(), &mut rng);
        log::info!(
            "[scene] lattice {}x{}x{} points={} segments={}",
            params.grid_x,
            params.grid_y,
            params.grid_z,
            lattice.points.len(),
            lattice.segments.len()
        );
        Ok(lattice)
    }

    /// Connect explicit positions without jitter; tests use it to pin exact distances.
    pub fn from_positions(positions: &[Vec3], connect_distance: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let placed = positions
            .iter()
            .map(|&p| (p, random_brightness(&mut rng)))
            .collect();
        Self::connect(placed, connect_distance, &mut rng)
    }

    fn connect(placed: Vec<(Vec3, f32)>, connect_distance: f32, rng: &mut StdRng) -> Self {
        let mut points: Vec<Point> = placed
            .into_iter()
            .map(|(p, brightness)| Point {
                x: p.x,
                y: p.y,
                z: p.z,
                original_y: p.y,
                brightness,
                segments: SmallVec::new(),
            })
            .collect();

        let mut segments = Vec::new();
        for i in 0..points.len() {
            let p1 = points[i].position();
            for j in (i + 1)..points.len() {
                if p1.distance(points[j].position()) < connect_distance {
                    let index = segments.len() as u32;
                    segments.push(Segment {
                        a: i as u32,
                        b: j as u32,
                        base_opacity: SEGMENT_OPACITY_MIN
                            + rng.gen::<f32>() * SEGMENT_OPACITY_SPAN,
                    });
                    points[i].segments.push(index);
                    points[j].segments.push(index);
                }
            }
        }

        let point_vertices = points
            .iter()
            .map(|p| PointVertex {
                position: p.position().to_array(),
                color: [p.brightness, POINT_GREEN_BLUE, POINT_GREEN_BLUE, POINT_OPACITY],
            })
            .collect();
        let mut line_vertices = Vec::with_capacity(segments.len() * 2);
        for s in &segments {
            for end in [s.a, s.b] {
                line_vertices.push(LineVertex {
                    position: points[end as usize].position().to_array(),
                    alpha: s.base_opacity,
                });
            }
        }

        Self {
            points,
            segments,
            point_vertices,
            line_vertices,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn point_vertices(&self) -> &[PointVertex] {
        &self.point_vertices
    }

    #[inline]
    pub fn line_vertices(&self) -> &[LineVertex] {
        &self.line_vertices
    }

    #[inline]
    pub fn point_position(&self, index: usize) -> Vec3 {
        self.points[index].position()
    }

    /// Current rendered endpoints of segment `index`.
    pub fn segment_endpoints(&self, index: usize) -> [Vec3; 2] {
        [
            Vec3::from_array(self.line_vertices[index * 2].position),
            Vec3::from_array(self.line_vertices[index * 2 + 1].position),
        ]
    }

    #[inline]
    pub fn segment_opacity(&self, index: usize) -> f32 {
        self.line_vertices[index * 2].alpha
    }
}

fn grid_positions(params: &SceneParams, rng: &mut StdRng) -> Vec<(Vec3, f32)> {
    let half_x = params.grid_x as f32 / 2.0;
    let half_y = params.grid_y as f32 / 2.0;
    let center_z = (params.grid_z as f32 - 1.0) / 2.0;
    let mut out = Vec::with_capacity(params.point_count());
    for i in 0..params.grid_x {
        for j in 0..params.grid_y {
            for k in 0..params.grid_z {
                let x = (i as f32 - half_x) * params.spacing + jitter(rng, params.jitter);
                let y = (j as f32 - half_y) * params.spacing + jitter(rng, params.jitter);
                let z = (k as f32 - center_z) * params.spacing * params.depth_stretch
                    + jitter(rng, params.jitter);
                out.push((Vec3::new(x, y, z), random_brightness(rng)));
            }
        }
    }
    out
}

#[inline]
fn jitter(rng: &mut StdRng, width: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * width
}

#[inline]
fn random_brightness(rng: &mut StdRng) -> f32 {
    POINT_BRIGHTNESS_MIN + rng.gen::<f32>() * POINT_BRIGHTNESS_SPAN
}
