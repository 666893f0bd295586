use rand::Rng;
use serde::{Deserialize, Serialize};

use super::particle::{advance_particle, sample_particle, WindParticle};
use crate::resources::config::WindConfig;

/// The set of wind streaks drawn around the rotor.
///
/// The field is replaced wholesale on every resync; particles carry no identity
/// from one tick to the next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindParticleField {
    particles: Vec<WindParticle>,
}

impl WindParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[WindParticle] {
        &self.particles
    }

    /// Replace the field with `count` freshly sampled particles.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R, config: &WindConfig) {
        self.particles = (0..count).map(|_| sample_particle(rng, config)).collect();
    }

    pub fn clear(&mut self) {
        self.particles = Vec::new();
    }

    /// Regenerate the field at the size `angular_velocity` calls for, or empty
    /// it when the rotor is below the wind threshold. Returns the new size.
    pub fn resync<R: Rng + ?Sized>(
        &mut self,
        angular_velocity: f64,
        rng: &mut R,
        config: &WindConfig,
    ) -> usize {
        match config.target_count(angular_velocity) {
            0 => self.clear(),
            count => self.regenerate(count, rng, config),
        }
        self.len()
    }

    /// Rotate every particle by one tick.
    pub fn advance(&mut self, angular_velocity: f64, config: &WindConfig) {
        for particle in &mut self.particles {
            advance_particle(particle, angular_velocity, config.spin_scale);
        }
    }
}
