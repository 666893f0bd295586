use std::f64::consts::TAU;
use windmill::{PhysicsState, WindParticleField};

/// Assert that every stored and derived rotor quantity is usable
#[track_caller]
pub fn assert_state_valid(state: &PhysicsState) {
    assert!(state.radius() > 0.0, "Radius must be positive");
    assert!(state.mass() > 0.0, "Mass must be positive");
    assert!(
        state.angular_momentum().is_finite(),
        "Angular momentum is not finite"
    );
    assert!(
        state.moment_of_inertia().is_finite() && state.moment_of_inertia() > 0.0,
        "Moment of inertia must be positive and finite"
    );
    assert!(
        state.angular_velocity().is_finite(),
        "Angular velocity is not finite"
    );
    assert!(state.blade_angle().is_finite(), "Blade angle is not finite");
}

/// Assert that every particle phase lies in [0, 2π)
#[track_caller]
pub fn assert_phases_wrapped(field: &WindParticleField) {
    for (i, particle) in field.particles().iter().enumerate() {
        assert!(
            (0.0..TAU).contains(&particle.phase_angle),
            "Particle {} has phase {} outside [0, 2π)",
            i,
            particle.phase_angle
        );
    }
}

/// Assert that the field holds the number of particles `angular_velocity` calls for
#[track_caller]
pub fn assert_field_matches_speed(field: &WindParticleField, angular_velocity: f64) {
    assert_eq!(
        field.len(),
        super::expected_particle_count(angular_velocity),
        "Wrong field size at ω = {}",
        angular_velocity
    );
}
