use serde::{Deserialize, Serialize};

use crate::utils::{
    INITIAL_PARTICLES, MAX_PARTICLES, OPACITY_RANGE, ORBIT_RADIUS_RANGE, PARTICLES_PER_RAD_S,
    PARTICLE_SPIN_SCALE, TRAIL_LENGTH_RANGE, WIND_THRESHOLD,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Particles only exist while ω is strictly above this [rad/s]
    pub threshold: f64,
    /// Particles per rad/s of rotor speed
    pub density: f64,
    pub max_particles: usize,
    /// Phase increment per tick is `ω · spin_scale`
    pub spin_scale: f64,
    /// Size of the field drawn before the first run starts
    pub initial_particles: usize,
    pub orbit_radius_range: [f64; 2],
    pub trail_length_range: [f64; 2],
    pub opacity_range: [f64; 2],
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            threshold: WIND_THRESHOLD,
            density: PARTICLES_PER_RAD_S,
            max_particles: MAX_PARTICLES,
            spin_scale: PARTICLE_SPIN_SCALE,
            initial_particles: INITIAL_PARTICLES,
            orbit_radius_range: ORBIT_RADIUS_RANGE,
            trail_length_range: TRAIL_LENGTH_RANGE,
            opacity_range: OPACITY_RANGE,
        }
    }
}

impl WindConfig {
    pub fn is_windy(&self, angular_velocity: f64) -> bool {
        angular_velocity > self.threshold
    }

    /// Number of particles the field should hold at `angular_velocity`.
    pub fn target_count(&self, angular_velocity: f64) -> usize {
        if !self.is_windy(angular_velocity) {
            return 0;
        }
        let count = (angular_velocity * self.density).round();
        if count >= self.max_particles as f64 {
            self.max_particles
        } else {
            count as usize
        }
    }
}
