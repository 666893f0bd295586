use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::physics::{conserve_momentum, integrate_blade_angle, RotorReading};
use crate::rendering::{blade_width, DrawSurface, SceneRenderer};
use crate::resources::config::SimulationConfig;
use crate::simulation::io::{DisplaySink, InputSource, Readout};
use crate::state::PhysicsState;
use crate::utils::errors::SimError;
use crate::utils::{RngManager, WIND_STREAM};
use crate::wind::WindParticleField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Stopped,
    Running,
}

/// Drives the rotor at a fixed logical rate.
///
/// The scheduler never sleeps or spawns anything itself. Each call that can
/// start work returns the delay after which the host must call [`tick`] again;
/// `None` means nothing is scheduled. At most one tick is ever outstanding, and
/// a stop request takes effect when that tick runs.
///
/// [`tick`]: AnimationScheduler::tick
pub struct AnimationScheduler {
    config: SimulationConfig,
    state: PhysicsState,
    field: WindParticleField,
    renderer: SceneRenderer,
    rng: ChaCha8Rng,
    run_state: RunState,
    tick_in_flight: bool,
    tick_count: u64,
}

impl AnimationScheduler {
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;

        let physics = &config.physics;
        let state = PhysicsState::new(
            physics.initial_radius,
            physics.initial_mass,
            physics.initial_angular_velocity,
        )?;

        let mut rng = RngManager::new(config.seed).get_rng(WIND_STREAM);
        let mut field = WindParticleField::new();
        field.regenerate(config.wind.initial_particles, &mut rng, &config.wind);

        let renderer = SceneRenderer::new(config.render.clone(), config.wind.threshold);

        Ok(Self {
            config,
            state,
            field,
            renderer,
            rng,
            run_state: RunState::Stopped,
            tick_in_flight: false,
            tick_count: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &PhysicsState {
        &self.state
    }

    pub fn field(&self) -> &WindParticleField {
        &self.field
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Whether a tick has been handed to the host and not yet run
    pub fn tick_in_flight(&self) -> bool {
        self.tick_in_flight
    }

    /// Ticks that did work since construction or the last reset
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Flip between Stopped and Running.
    ///
    /// Returns `Some(Duration::ZERO)` when the host should run a tick right away.
    pub fn toggle(&mut self) -> Option<Duration> {
        match self.run_state {
            RunState::Stopped => self.start(),
            RunState::Running => {
                self.stop();
                None
            }
        }
    }

    pub fn start(&mut self) -> Option<Duration> {
        if self.run_state == RunState::Running {
            return None;
        }
        self.run_state = RunState::Running;
        log::info!("Rotor started (L = {:.2})", self.state.angular_momentum());

        if self.tick_in_flight {
            // The outstanding tick will pick the run back up
            None
        } else {
            self.tick_in_flight = true;
            Some(Duration::ZERO)
        }
    }

    pub fn stop(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Stopped;
            log::info!("Rotor stopped after {} ticks", self.tick_count);
        }
    }

    /// Run one tick if the scheduler is running.
    ///
    /// Reads the inputs, applies the conservation update, integrates the blade
    /// angle, resyncs and advances the wind field, pushes a readout and renders.
    /// Returns the delay until the next tick, or `None` once stopped.
    ///
    /// # Errors
    /// Invalid inputs and render failures abort the tick and leave nothing
    /// scheduled.
    pub fn tick<I, D, S>(
        &mut self,
        inputs: &I,
        display: &mut D,
        surface: &mut S,
    ) -> Result<Option<Duration>, SimError>
    where
        I: InputSource + ?Sized,
        D: DisplaySink + ?Sized,
        S: DrawSurface + ?Sized,
    {
        self.tick_in_flight = false;
        if self.run_state != RunState::Running {
            return Ok(None);
        }

        let reading = conserve_momentum(&mut self.state, inputs.radius(), inputs.mass())?;
        let omega = reading.angular_velocity;
        integrate_blade_angle(&mut self.state, omega, self.config.physics.time_step());

        self.field.resync(omega, &mut self.rng, &self.config.wind);
        self.field.advance(omega, &self.config.wind);

        self.tick_count += 1;
        display.show(&self.readout(&reading));

        self.renderer.render(surface, &self.state, &self.field)?;

        self.tick_in_flight = true;
        Ok(Some(self.config.physics.frame_interval()))
    }

    /// Render the current state without advancing anything
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), SimError> {
        self.renderer.render(surface, &self.state, &self.field)
    }

    /// Stop and start a new run from the current inputs.
    ///
    /// Angular momentum is re-derived from the configured initial angular
    /// velocity, the blade angle returns to zero and the field is reseeded.
    pub fn reset<I: InputSource + ?Sized>(&mut self, inputs: &I) -> Result<(), SimError> {
        self.stop();
        self.state.reset(
            inputs.radius(),
            inputs.mass(),
            self.config.physics.initial_angular_velocity,
        )?;
        self.field.regenerate(
            self.config.wind.initial_particles,
            &mut self.rng,
            &self.config.wind,
        );
        self.tick_count = 0;
        log::info!(
            "Rotor reset: r = {:.2}, m = {:.2}, L = {:.2}",
            self.state.radius(),
            self.state.mass(),
            self.state.angular_momentum()
        );
        Ok(())
    }

    fn readout(&self, reading: &RotorReading) -> Readout {
        Readout {
            tick: self.tick_count,
            radius: self.state.radius(),
            mass: self.state.mass(),
            angular_velocity: reading.angular_velocity,
            moment_of_inertia: reading.moment_of_inertia,
            angular_momentum: self.state.angular_momentum(),
            blade_width: blade_width(self.state.mass()),
            particle_count: self.field.len(),
        }
    }
}
