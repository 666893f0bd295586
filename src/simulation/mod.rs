mod io;
mod runner;
mod scheduler;

pub use io::{ControlPanel, DisplaySink, InputSource, Readout, ReadoutLabels, ReadoutRecorder};
pub use runner::{control_channel, ControlEvent, Pacing, RunSummary, SimulationRunner};
pub use scheduler::{AnimationScheduler, RunState};
