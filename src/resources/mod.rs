pub mod config;
mod time;

pub use config::{PhysicsConfig, RenderConfig, SimulationConfig, WindConfig};
pub use time::FrameClock;
