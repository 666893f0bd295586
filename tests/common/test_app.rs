use std::time::Duration;

use windmill::{
    rendering::RecordingSurface,
    resources::config::WindConfig,
    simulation::{ControlPanel, Readout, ReadoutRecorder},
    AnimationScheduler, PhysicsState, SimulationConfig, WindParticleField,
};

// Builder for creating a test simulation with customizable configuration
pub struct TestSimBuilder {
    config: SimulationConfig,
}

impl Default for TestSimBuilder {
    fn default() -> Self {
        Self {
            config: super::create_test_config(),
        }
    }
}

impl TestSimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_initial_angular_velocity(mut self, omega: f64) -> Self {
        self.config.physics.initial_angular_velocity = omega;
        self
    }

    pub fn with_wind(mut self, wind: WindConfig) -> Self {
        self.config.wind = wind;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> TestSim {
        let width = self.config.render.screen_width as f32;
        let height = self.config.render.screen_height as f32;
        let panel = ControlPanel::from_config(&self.config.physics);
        let scheduler = AnimationScheduler::new(self.config).expect("valid test config");

        TestSim {
            scheduler,
            panel,
            display: ReadoutRecorder::new(),
            surface: RecordingSurface::new(width, height),
        }
    }
}

/// Scheduler plus in-memory collaborators, stepped by hand
pub struct TestSim {
    pub scheduler: AnimationScheduler,
    pub panel: ControlPanel,
    pub display: ReadoutRecorder,
    pub surface: RecordingSurface,
}

impl TestSim {
    /// Start the rotor; returns the delay the scheduler asked for
    pub fn start(&mut self) -> Option<Duration> {
        let next = self.scheduler.toggle();
        assert!(self.scheduler.is_running(), "Scheduler did not start");
        next
    }

    pub fn run_frame(&mut self) -> Option<Duration> {
        self.scheduler
            .tick(&self.panel, &mut self.display, &mut self.surface)
            .expect("tick failed")
    }

    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.run_frame();
        }
    }

    pub fn set_sliders(&mut self, radius: f64, mass: f64) {
        self.panel.set_radius(radius);
        self.panel.set_mass(mass);
    }

    pub fn state(&self) -> &PhysicsState {
        self.scheduler.state()
    }

    pub fn field(&self) -> &WindParticleField {
        self.scheduler.field()
    }

    pub fn last_readout(&self) -> &Readout {
        self.display.last().expect("no readout recorded")
    }
}
