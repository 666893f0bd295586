use super::error::StateError;
use crate::physics::moment_of_inertia;
use serde::{Deserialize, Serialize};

/// Rotor state for a single run.
///
/// Angular momentum is captured when the run is created and only changes on
/// [`PhysicsState::reset`]. Moment of inertia and angular velocity are derived
/// from the current radius and mass every time they are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsState {
    radius: f64,
    mass: f64,
    angular_momentum: f64,
    blade_angle: f64,
}

impl PhysicsState {
    /// Create a state spinning at `angular_velocity`, fixing `L = I·ω`.
    pub fn new(radius: f64, mass: f64, angular_velocity: f64) -> Result<Self, StateError> {
        validate_geometry(radius, mass)?;
        if !angular_velocity.is_finite() {
            return Err(StateError::InvalidValue(format!(
                "initial angular velocity must be finite, got {angular_velocity}"
            )));
        }

        Ok(Self {
            radius,
            mass,
            angular_momentum: moment_of_inertia(mass, radius) * angular_velocity,
            blade_angle: 0.0,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn angular_momentum(&self) -> f64 {
        self.angular_momentum
    }

    /// Accumulated rotation in radians. Not wrapped.
    pub fn blade_angle(&self) -> f64 {
        self.blade_angle
    }

    pub fn moment_of_inertia(&self) -> f64 {
        moment_of_inertia(self.mass, self.radius)
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_momentum / self.moment_of_inertia()
    }

    /// Start a fresh run from the given geometry, re-deriving angular momentum
    pub fn reset(&mut self, radius: f64, mass: f64, angular_velocity: f64) -> Result<(), StateError> {
        *self = Self::new(radius, mass, angular_velocity)?;
        Ok(())
    }

    pub(crate) fn set_geometry(&mut self, radius: f64, mass: f64) -> Result<(), StateError> {
        validate_geometry(radius, mass)?;
        self.radius = radius;
        self.mass = mass;
        Ok(())
    }

    pub(crate) fn advance_blade_angle(&mut self, delta: f64) {
        self.blade_angle += delta;
    }
}

fn validate_geometry(radius: f64, mass: f64) -> Result<(), StateError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(StateError::InvalidValue(format!(
            "radius must be positive and finite, got {radius}"
        )));
    }
    if !(mass.is_finite() && mass > 0.0) {
        return Err(StateError::InvalidValue(format!(
            "mass must be positive and finite, got {mass}"
        )));
    }
    Ok(())
}
