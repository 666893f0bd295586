use crate::state::PhysicsState;

/// Advance the blade angle by `angular_velocity · dt` and return the new angle.
///
/// The angle accumulates without wrapping; everything that consumes it goes
/// through periodic trig functions. `dt` is the fixed logical step, not the
/// measured wall time.
pub fn integrate_blade_angle(state: &mut PhysicsState, angular_velocity: f64, dt: f64) -> f64 {
    state.advance_blade_angle(angular_velocity * dt);
    state.blade_angle()
}
