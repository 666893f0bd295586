use serde::{Deserialize, Serialize};

use crate::physics::error::PhysicsError;
use crate::state::PhysicsState;
use crate::utils::INERTIA_FACTOR;

/// Values derived by one conservation update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotorReading {
    pub moment_of_inertia: f64,
    pub angular_velocity: f64,
}

/// Moment of inertia of the rotor, modelled as one point mass per blade tip.
#[inline]
pub fn moment_of_inertia(mass: f64, radius: f64) -> f64 {
    INERTIA_FACTOR * mass * radius.powi(2)
}

/// Apply a new radius and mass to the rotor while holding angular momentum fixed.
///
/// Computes `I = 3·m·r²` and `ω = L / I`. The blade angle is not touched; angle
/// integration is a separate step (see [`crate::physics::integrate_blade_angle`]).
///
/// # Errors
/// Non-positive or non-finite inputs are rejected with
/// [`PhysicsError::InvalidParameter`]. They should have been clamped before
/// reaching this point, so the state is left unchanged rather than carrying a NaN.
pub fn conserve_momentum(
    state: &mut PhysicsState,
    radius: f64,
    mass: f64,
) -> Result<RotorReading, PhysicsError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(PhysicsError::InvalidParameter(format!(
            "radius must be positive, got {radius}"
        )));
    }
    if !(mass.is_finite() && mass > 0.0) {
        return Err(PhysicsError::InvalidParameter(format!(
            "mass must be positive, got {mass}"
        )));
    }

    let inertia = moment_of_inertia(mass, radius);
    let angular_velocity = state.angular_momentum() / inertia;
    if !(inertia > 0.0 && angular_velocity.is_finite()) {
        return Err(PhysicsError::ComputationError(format!(
            "degenerate rotor: I = {inertia}, ω = {angular_velocity}"
        )));
    }

    state.set_geometry(radius, mass)?;

    Ok(RotorReading {
        moment_of_inertia: inertia,
        angular_velocity,
    })
}
