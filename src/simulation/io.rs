use serde::{Deserialize, Serialize};

use crate::resources::config::PhysicsConfig;
use crate::utils::clamp_to;

/// Where the scheduler reads the slider values from each tick.
pub trait InputSource {
    fn radius(&self) -> f64;
    fn mass(&self) -> f64;
}

/// Receives the derived quantities once per tick.
pub trait DisplaySink {
    fn show(&mut self, readout: &Readout);
}

/// Everything the display layer shows after a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    pub tick: u64,
    pub radius: f64,
    pub mass: f64,
    pub angular_velocity: f64,
    pub moment_of_inertia: f64,
    pub angular_momentum: f64,
    pub blade_width: f64,
    pub particle_count: usize,
}

/// Readout values as the display labels show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadoutLabels {
    pub radius: String,
    pub mass: String,
    pub angular_velocity: String,
    pub moment_of_inertia: String,
    pub angular_momentum: String,
}

impl Readout {
    pub fn labels(&self) -> ReadoutLabels {
        ReadoutLabels {
            radius: format!("{:.2}", self.radius),
            mass: format!("{:.2}", self.mass),
            angular_velocity: format!("{:.2}", self.angular_velocity),
            moment_of_inertia: format!("{:.2}", self.moment_of_inertia),
            angular_momentum: format!("{:.2}", self.angular_momentum),
        }
    }
}

/// Radius and mass sliders. Values are clamped into their configured ranges
/// on the way in, so the physics never sees a non-positive value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPanel {
    radius: f64,
    mass: f64,
    radius_range: [f64; 2],
    mass_range: [f64; 2],
}

impl ControlPanel {
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self {
            radius: clamp_to(config.initial_radius, config.radius_range),
            mass: clamp_to(config.initial_mass, config.mass_range),
            radius_range: config.radius_range,
            mass_range: config.mass_range,
        }
    }

    pub fn radius_range(&self) -> [f64; 2] {
        self.radius_range
    }

    pub fn mass_range(&self) -> [f64; 2] {
        self.mass_range
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = clamp_slider("radius", radius, self.radius_range, self.radius);
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = clamp_slider("mass", mass, self.mass_range, self.mass);
    }
}

fn clamp_slider(name: &str, value: f64, range: [f64; 2], current: f64) -> f64 {
    if value.is_nan() {
        log::warn!("Ignoring NaN {name} input");
        return current;
    }
    let clamped = clamp_to(value, range);
    if clamped != value {
        log::warn!("Clamped {name} {value} into [{}, {}]", range[0], range[1]);
    }
    clamped
}

impl InputSource for ControlPanel {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}

/// Display sink that keeps every readout, e.g. for dumping to JSON after a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadoutRecorder {
    readouts: Vec<Readout>,
}

impl ReadoutRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn readouts(&self) -> &[Readout] {
        &self.readouts
    }

    pub fn last(&self) -> Option<&Readout> {
        self.readouts.last()
    }
}

impl DisplaySink for ReadoutRecorder {
    fn show(&mut self, readout: &Readout) {
        let labels = readout.labels();
        log::debug!(
            "tick {}: r = {}, m = {}, ω = {}, I = {}, L = {}",
            readout.tick,
            labels.radius,
            labels.mass,
            labels.angular_velocity,
            labels.moment_of_inertia,
            labels.angular_momentum
        );
        self.readouts.push(readout.clone());
    }
}
