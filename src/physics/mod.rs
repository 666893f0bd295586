mod conservation;
pub mod error;
mod integrator;

pub use conservation::{conserve_momentum, moment_of_inertia, RotorReading};
pub use error::PhysicsError;
pub use integrator::integrate_blade_angle;
