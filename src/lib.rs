pub mod physics;
pub mod rendering;
pub mod resources;
pub mod simulation;
pub mod state;
pub mod utils;
pub mod wind;

pub use physics::{conserve_momentum, integrate_blade_angle, PhysicsError, RotorReading};
pub use rendering::{DrawSurface, PixmapSurface, RecordingSurface, SceneRenderer};
pub use resources::SimulationConfig;
pub use simulation::{AnimationScheduler, ControlEvent, ControlPanel, RunState, SimulationRunner};
pub use state::PhysicsState;
pub use utils::errors::SimError;
pub use wind::{WindParticle, WindParticleField};
