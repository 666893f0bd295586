pub mod export;
mod scene;
mod skia;
mod surface;
mod types;

pub use scene::{blade_angles, blade_length, blade_outline, blade_width, particle_trail, SceneRenderer};
pub use skia::PixmapSurface;
pub use surface::{DrawSurface, RecordingSurface};
pub use types::*;
