use crossbeam_channel::{Receiver, Sender, TryRecvError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::rendering::DrawSurface;
use crate::resources::FrameClock;
use crate::simulation::io::{ControlPanel, DisplaySink};
use crate::simulation::scheduler::AnimationScheduler;
use crate::utils::errors::SimError;

/// Discrete events coming from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlEvent {
    Toggle,
    SetRadius(f64),
    SetMass(f64),
    Reset,
    Quit,
}

pub fn control_channel() -> (Sender<ControlEvent>, Receiver<ControlEvent>) {
    crossbeam_channel::unbounded()
}

/// How long the host waits between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pacing {
    /// Sleep for the delay the scheduler asks for
    RealTime,
    /// Run the next tick immediately; logical time is unaffected
    Unpaced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed_seconds: f64,
    pub fps: f64,
}

/// Single-threaded host for an [`AnimationScheduler`].
///
/// Owns the slider values, the display sink and the drawing surface. Control
/// events are only applied between ticks, never while one is running.
pub struct SimulationRunner<S: DrawSurface, D: DisplaySink> {
    scheduler: AnimationScheduler,
    panel: ControlPanel,
    surface: S,
    display: D,
    events: Receiver<ControlEvent>,
    pacing: Pacing,
    clock: FrameClock,
    next_tick: Option<Duration>,
    events_open: bool,
}

impl<S: DrawSurface, D: DisplaySink> SimulationRunner<S, D> {
    pub fn new(
        scheduler: AnimationScheduler,
        surface: S,
        display: D,
        events: Receiver<ControlEvent>,
    ) -> Self {
        let panel = ControlPanel::from_config(&scheduler.config().physics);
        Self {
            scheduler,
            panel,
            surface,
            display,
            events,
            pacing: Pacing::RealTime,
            clock: FrameClock::new(),
            next_tick: None,
            events_open: true,
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_parts(self) -> (AnimationScheduler, S, D) {
        (self.scheduler, self.surface, self.display)
    }

    /// Draw the scene as it stands before any tick has run
    pub fn draw_initial(&mut self) -> Result<(), SimError> {
        self.scheduler.draw(&mut self.surface)
    }

    /// Run until a `Quit` event, until `max_ticks` ticks have run, or until the
    /// scheduler is idle and every sender has been dropped.
    ///
    /// `on_frame` is called after every tick that did work, with the tick
    /// number and the freshly drawn surface.
    pub fn run<F>(&mut self, max_ticks: Option<u64>, mut on_frame: F) -> Result<RunSummary, SimError>
    where
        F: FnMut(u64, &S) -> Result<(), SimError>,
    {
        self.clock.reset();
        let mut ticks = 0u64;

        loop {
            if max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }

            match self.next_tick.take() {
                Some(delay) => {
                    if self.pacing == Pacing::RealTime && !delay.is_zero() {
                        std::thread::sleep(delay);
                    }
                    if !self.drain_events()? {
                        break;
                    }
                    self.next_tick =
                        self.scheduler
                            .tick(&self.panel, &mut self.display, &mut self.surface)?;
                    if self.next_tick.is_some() {
                        ticks += 1;
                        self.clock.tick();
                        on_frame(self.scheduler.tick_count(), &self.surface)?;
                    }
                }
                None => {
                    // Idle: wait for the next control event
                    if !self.events_open {
                        break;
                    }
                    match self.events.recv() {
                        Ok(event) => {
                            if !self.apply(event)? {
                                break;
                            }
                        }
                        Err(_) => self.events_open = false,
                    }
                }
            }
        }

        let summary = RunSummary {
            ticks,
            elapsed_seconds: self.clock.elapsed_seconds(),
            fps: self.clock.fps(),
        };
        log::info!(
            "Run finished: {} ticks in {:.2}s ({:.1} fps)",
            summary.ticks,
            summary.elapsed_seconds,
            summary.fps
        );
        Ok(summary)
    }

    /// Apply every queued event. Returns `false` on `Quit`.
    fn drain_events(&mut self) -> Result<bool, SimError> {
        while self.events_open {
            match self.events.try_recv() {
                Ok(event) => {
                    if !self.apply(event)? {
                        return Ok(false);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => self.events_open = false,
            }
        }
        Ok(true)
    }

    fn apply(&mut self, event: ControlEvent) -> Result<bool, SimError> {
        match event {
            ControlEvent::Toggle => {
                if let Some(delay) = self.scheduler.toggle() {
                    self.next_tick = Some(delay);
                }
            }
            ControlEvent::SetRadius(radius) => self.panel.set_radius(radius),
            ControlEvent::SetMass(mass) => self.panel.set_mass(mass),
            ControlEvent::Reset => {
                self.scheduler.reset(&self.panel)?;
                self.scheduler.draw(&mut self.surface)?;
            }
            ControlEvent::Quit => return Ok(false),
        }
        Ok(true)
    }
}
