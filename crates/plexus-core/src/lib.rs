pub mod animator;
pub mod camera;
pub mod constants;
pub mod lattice;
pub mod params;
pub mod scene;
pub mod widgets;

pub use animator::*;
pub use camera::*;
pub use constants::*;
pub use lattice::*;
pub use params::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
