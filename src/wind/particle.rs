use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::resources::config::WindConfig;
use crate::utils::wrap_angle;

/// A single streak orbiting the hub.
///
/// Only `phase_angle` changes after sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindParticle {
    /// Angular position around the hub, in `[0, 2π)` [rad]
    pub phase_angle: f64,
    /// Distance of the streak head from the hub center [px]
    pub orbit_radius: f64,
    /// Radial length of the streak [px]
    pub trail_length: f64,
    /// Stroke alpha in `[0, 1]`
    pub opacity: f64,
}

/// Draw a fresh particle using the sampling ranges in `config`.
pub fn sample_particle<R: Rng + ?Sized>(rng: &mut R, config: &WindConfig) -> WindParticle {
    WindParticle {
        phase_angle: rng.gen_range(0.0..TAU),
        orbit_radius: rng.gen_range(config.orbit_radius_range[0]..config.orbit_radius_range[1]),
        trail_length: rng.gen_range(config.trail_length_range[0]..config.trail_length_range[1]),
        opacity: rng.gen_range(config.opacity_range[0]..config.opacity_range[1]),
    }
}

/// Rotate a particle by one tick's worth of `angular_velocity`.
pub fn advance_particle(particle: &mut WindParticle, angular_velocity: f64, spin_scale: f64) {
    particle.phase_angle = wrap_angle(particle.phase_angle + angular_velocity * spin_scale);
}
