use std::time::Duration;

use approx::assert_relative_eq;
use windmill::rendering::RecordingSurface;
use windmill::simulation::{control_channel, ControlEvent, Pacing, ReadoutRecorder};
use windmill::{AnimationScheduler, RunState, SimulationRunner};

use crate::common::{create_test_config, TestSimBuilder};

#[test]
fn test_double_toggle_leaves_state_untouched() {
    let reference = AnimationScheduler::new(create_test_config()).unwrap();
    let mut sim = TestSimBuilder::new().build();

    assert_eq!(sim.scheduler.toggle(), Some(Duration::ZERO));
    assert_eq!(sim.scheduler.toggle(), None);

    // The tick requested by the first toggle finds the rotor stopped
    assert_eq!(sim.run_frame(), None);

    assert_eq!(sim.scheduler.run_state(), RunState::Stopped);
    assert!(!sim.scheduler.tick_in_flight());
    assert_eq!(sim.scheduler.tick_count(), 0);
    assert_eq!(sim.state(), reference.state());
    assert_eq!(sim.field(), reference.field());
    assert!(sim.display.readouts().is_empty());
}

#[test]
fn test_stop_takes_effect_at_next_boundary() {
    let mut sim = TestSimBuilder::new().build();
    sim.start();
    sim.run_steps(5);
    let angle = sim.state().blade_angle();

    sim.scheduler.stop();
    assert!(sim.scheduler.tick_in_flight());
    assert_eq!(sim.run_frame(), None);

    assert_eq!(sim.scheduler.tick_count(), 5);
    assert_eq!(sim.display.readouts().len(), 5);
    assert_eq!(sim.state().blade_angle(), angle);
}

#[test]
fn test_resume_continues_from_stopped_state() {
    let mut sim = TestSimBuilder::new().build();
    sim.start();
    sim.run_steps(3);
    sim.scheduler.stop();
    sim.run_frame();

    sim.start();
    sim.run_frame();

    assert_eq!(sim.scheduler.tick_count(), 4);
    assert_relative_eq!(sim.state().blade_angle(), 4.0 * 5.0 / 120.0, epsilon = 1e-12);
}

#[test]
fn test_runner_applies_events_between_ticks() {
    let (tx, rx) = control_channel();
    tx.send(ControlEvent::Toggle).unwrap();

    let scheduler = AnimationScheduler::new(create_test_config()).unwrap();
    let mut runner = SimulationRunner::new(
        scheduler,
        RecordingSurface::new(400.0, 400.0),
        ReadoutRecorder::new(),
        rx,
    )
    .with_pacing(Pacing::Unpaced);

    let summary = runner
        .run(Some(40), |tick, _| {
            tx.send(ControlEvent::SetRadius(0.5 + tick as f64 * 0.05)).unwrap();
            Ok(())
        })
        .unwrap();

    assert_eq!(summary.ticks, 40);
    let readouts = runner.display().readouts();
    assert_eq!(readouts.len(), 40);
    assert_eq!(readouts[0].radius, 1.0);

    for (i, readout) in readouts.iter().enumerate().skip(1) {
        assert_relative_eq!(readout.radius, (0.5 + i as f64 * 0.05).min(3.0), epsilon = 1e-12);
        assert_relative_eq!(readout.angular_momentum, 15.0, epsilon = 1e-12);
        assert_relative_eq!(
            readout.angular_velocity * readout.moment_of_inertia,
            15.0,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_runner_reset_event() {
    let (tx, rx) = control_channel();
    tx.send(ControlEvent::Toggle).unwrap();

    let scheduler = AnimationScheduler::new(create_test_config()).unwrap();
    let mut runner = SimulationRunner::new(
        scheduler,
        RecordingSurface::new(400.0, 400.0),
        ReadoutRecorder::new(),
        rx,
    )
    .with_pacing(Pacing::Unpaced);

    let summary = runner
        .run(None, |tick, _| {
            if tick == 10 {
                tx.send(ControlEvent::SetMass(2.0)).unwrap();
                tx.send(ControlEvent::Reset).unwrap();
                tx.send(ControlEvent::Quit).unwrap();
            }
            Ok(())
        })
        .unwrap();

    assert_eq!(summary.ticks, 10);
    let scheduler = runner.scheduler();
    assert_eq!(scheduler.run_state(), RunState::Stopped);
    assert_eq!(scheduler.tick_count(), 0);
    assert_eq!(scheduler.state().blade_angle(), 0.0);
    // L = 3 · 2 · 1² · 5
    assert_relative_eq!(scheduler.state().angular_momentum(), 30.0);
}

#[test]
fn test_scheduler_rejects_unrepresentable_frame_rate() {
    let mut config = create_test_config();
    config.physics.frame_rate = 1e-30;

    assert!(matches!(
        AnimationScheduler::new(config),
        Err(windmill::SimError::InvalidConfig(_))
    ));
}
