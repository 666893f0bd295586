use super::{physics::PhysicsConfig, render::RenderConfig, wind::WindConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::utils::errors::SimError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub wind: WindConfig,
    pub render: RenderConfig,
    /// Master seed for particle sampling
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            wind: WindConfig::default(),
            render: RenderConfig::default(),
            seed: 42,
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from YAML or fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => {
                log::info!("Loaded simulation config from {:?}", path.as_ref());
                config
            }
            Err(SimError::Io(_)) => {
                log::info!("Simulation config file not found, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load simulation config: {}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path.as_ref())?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Reject configurations that would let a zero or negative value reach the physics.
    pub fn validate(&self) -> Result<(), SimError> {
        let physics = &self.physics;
        if !(physics.frame_rate.is_finite() && physics.frame_rate > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "frame_rate must be positive, got {}",
                physics.frame_rate
            )));
        }
        if Duration::try_from_secs_f64(physics.time_step()).is_err() {
            return Err(SimError::InvalidConfig(format!(
                "frame_rate {} gives a frame interval that does not fit a Duration",
                physics.frame_rate
            )));
        }
        check_range("radius_range", physics.radius_range, true)?;
        check_range("mass_range", physics.mass_range, true)?;
        check_within("initial_radius", physics.initial_radius, physics.radius_range)?;
        check_within("initial_mass", physics.initial_mass, physics.mass_range)?;
        if !physics.initial_angular_velocity.is_finite() {
            return Err(SimError::InvalidConfig(
                "initial_angular_velocity must be finite".into(),
            ));
        }

        let wind = &self.wind;
        if !(wind.density.is_finite() && wind.density >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "wind density must be non-negative, got {}",
                wind.density
            )));
        }
        if !(wind.threshold.is_finite() && wind.spin_scale.is_finite()) {
            return Err(SimError::InvalidConfig(
                "wind threshold and spin_scale must be finite".into(),
            ));
        }
        check_range("orbit_radius_range", wind.orbit_radius_range, false)?;
        check_range("trail_length_range", wind.trail_length_range, false)?;
        check_range("opacity_range", wind.opacity_range, false)?;
        if wind.opacity_range[0] < 0.0 || wind.opacity_range[1] > 1.0 {
            return Err(SimError::InvalidConfig(
                "opacity_range must lie within [0, 1]".into(),
            ));
        }

        if self.render.screen_width == 0 || self.render.screen_height == 0 {
            return Err(SimError::InvalidConfig(
                "render dimensions must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

fn check_range(name: &str, range: [f64; 2], strictly_positive: bool) -> Result<(), SimError> {
    let [lo, hi] = range;
    if !(lo.is_finite() && hi.is_finite() && lo < hi) {
        return Err(SimError::InvalidConfig(format!(
            "{name} must be an increasing pair of finite values, got [{lo}, {hi}]"
        )));
    }
    if strictly_positive && lo <= 0.0 {
        return Err(SimError::InvalidConfig(format!(
            "{name} must be strictly positive, got [{lo}, {hi}]"
        )));
    }
    Ok(())
}

fn check_within(name: &str, value: f64, range: [f64; 2]) -> Result<(), SimError> {
    if !(range[0]..=range[1]).contains(&value) {
        return Err(SimError::InvalidConfig(format!(
            "{name} = {value} lies outside [{}, {}]",
            range[0], range[1]
        )));
    }
    Ok(())
}
