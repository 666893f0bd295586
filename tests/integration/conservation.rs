use approx::assert_relative_eq;
use windmill::{conserve_momentum, integrate_blade_angle, PhysicsState};

use crate::common::{
    assert_state_valid, slider_sweep, TestSimBuilder, SCENARIO_MASS, SCENARIO_MOMENTUM,
    SCENARIO_OMEGA, SCENARIO_RADIUS,
};

#[test]
fn test_inertia_and_velocity_relation() {
    let mut state = PhysicsState::new(SCENARIO_RADIUS, SCENARIO_MASS, SCENARIO_OMEGA).unwrap();
    let momentum = state.angular_momentum();

    for radius in [0.5, 0.75, 1.0, 1.7, 2.3, 3.0] {
        for mass in [0.5, 1.0, 2.2, 5.0] {
            let reading = conserve_momentum(&mut state, radius, mass).unwrap();
            assert_relative_eq!(
                reading.moment_of_inertia,
                3.0 * mass * radius * radius,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                reading.angular_velocity,
                momentum / reading.moment_of_inertia,
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn test_scenario_doubling_radius() {
    let mut sim = TestSimBuilder::new().build();
    assert_relative_eq!(sim.state().angular_momentum(), SCENARIO_MOMENTUM);

    sim.start();
    sim.run_frame();
    assert_relative_eq!(sim.last_readout().angular_velocity, 5.0);

    sim.set_sliders(2.0, 1.0);
    sim.run_frame();

    let readout = sim.last_readout();
    assert_relative_eq!(readout.moment_of_inertia, 12.0);
    assert_relative_eq!(readout.angular_velocity, 1.25);
    assert_relative_eq!(readout.angular_momentum, 15.0);
    assert!(sim.field().is_empty());
}

#[test]
fn test_momentum_invariant_over_slider_changes() {
    let mut sim = TestSimBuilder::new().build();
    let initial = sim.state().angular_momentum();
    sim.start();

    for (radius, mass) in slider_sweep() {
        sim.set_sliders(radius, mass);
        sim.run_steps(30);

        assert_state_valid(sim.state());
        assert_eq!(sim.state().angular_momentum(), initial);
        assert_eq!(sim.last_readout().angular_momentum, initial);
    }
    assert_eq!(sim.scheduler.tick_count(), 30 * slider_sweep().len() as u64);
}

#[test]
fn test_blade_angle_recurrence() {
    let mut sim = TestSimBuilder::new().build();
    sim.start();

    let mut previous = sim.state().blade_angle();
    for (step, (radius, mass)) in slider_sweep().into_iter().cycle().take(400).enumerate() {
        sim.set_sliders(radius, mass);
        sim.run_frame();

        let omega = sim.last_readout().angular_velocity;
        let angle = sim.state().blade_angle();
        assert_relative_eq!(angle, previous + omega / 120.0, epsilon = 1e-9);
        previous = angle;
        assert_eq!(sim.scheduler.tick_count(), step as u64 + 1);
    }

    // Accumulated without wrapping
    assert!(sim.state().blade_angle() > std::f64::consts::TAU);
}

#[test]
fn test_integrator_ignores_wall_time() {
    let mut a = PhysicsState::new(1.0, 1.0, 5.0).unwrap();
    let mut b = a.clone();

    integrate_blade_angle(&mut a, 5.0, 1.0 / 120.0);
    std::thread::sleep(std::time::Duration::from_millis(5));
    integrate_blade_angle(&mut b, 5.0, 1.0 / 120.0);

    assert_eq!(a, b);
}
