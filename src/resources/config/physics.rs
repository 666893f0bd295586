use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::{
    DEFAULT_ANGULAR_VELOCITY, DEFAULT_MASS, DEFAULT_RADIUS, FRAME_RATE, MASS_RANGE, RADIUS_RANGE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Logical tick rate [Hz]
    pub frame_rate: f64,
    pub initial_radius: f64,
    pub initial_mass: f64,
    /// Spin rate used to fix angular momentum at the start of a run [rad/s]
    pub initial_angular_velocity: f64,
    /// Slider limits, both bounds strictly positive
    pub radius_range: [f64; 2],
    pub mass_range: [f64; 2],
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            initial_radius: DEFAULT_RADIUS,
            initial_mass: DEFAULT_MASS,
            initial_angular_velocity: DEFAULT_ANGULAR_VELOCITY,
            radius_range: RADIUS_RANGE,
            mass_range: MASS_RANGE,
        }
    }
}

impl PhysicsConfig {
    /// Fixed logical step used for angle integration [s]
    pub fn time_step(&self) -> f64 {
        1.0 / self.frame_rate
    }

    /// Delay between the end of one tick and the start of the next
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate)
    }
}
