pub mod physics;
pub mod render;
pub mod simulation;
pub mod wind;

pub use physics::PhysicsConfig;
pub use render::RenderConfig;
pub use simulation::SimulationConfig;
pub use wind::WindConfig;
