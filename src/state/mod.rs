mod error;
mod physics;

pub use error::StateError;
pub use physics::PhysicsState;
