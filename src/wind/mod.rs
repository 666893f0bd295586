mod field;
mod particle;

pub use field::WindParticleField;
pub use particle::{advance_particle, sample_particle, WindParticle};
