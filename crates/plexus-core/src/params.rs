use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("lattice dimensions must be non-zero, got {x}x{y}x{z}")]
    EmptyLattice { x: u32, y: u32, z: u32 },
    #[error("spacing must be positive and finite, got {0}")]
    BadSpacing(f32),
    #[error("connect multiplier must be positive and finite, got {0}")]
    BadConnectMultiplier(f32),
    #[error("jitter must be non-negative and finite, got {0}")]
    BadJitter(f32),
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },
}

/// Build parameters for the background lattice.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub grid_x: u32,
    pub grid_y: u32,
    pub grid_z: u32,
    pub spacing: f32,
    pub connect_multiplier: f32,
    pub jitter: f32,
    pub depth_stretch: f32,
    pub seed: u64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            grid_x: GRID_SIZE,
            grid_y: GRID_SIZE,
            grid_z: GRID_DEPTH,
            spacing: SPACING,
            connect_multiplier: CONNECT_MULTIPLIER,
            jitter: JITTER,
            depth_stretch: DEPTH_STRETCH,
            seed: DEFAULT_SEED,
        }
    }
}

impl SceneParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Points closer than this are joined by a segment.
    #[inline]
    pub fn connect_distance(&self) -> f32 {
        self.spacing * self.connect_multiplier
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.grid_x as usize * self.grid_y as usize * self.grid_z as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_x == 0 || self.grid_y == 0 || self.grid_z == 0 {
            return Err(ConfigError::EmptyLattice {
                x: self.grid_x,
                y: self.grid_y,
                z: self.grid_z,
            });
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(ConfigError::BadSpacing(self.spacing));
        }
        if !(self.connect_multiplier.is_finite() && self.connect_multiplier > 0.0) {
            return Err(ConfigError::BadConnectMultiplier(self.connect_multiplier));
        }
        if !(self.jitter.is_finite() && self.jitter >= 0.0) {
            return Err(ConfigError::BadJitter(self.jitter));
        }
        Ok(())
    }
}
