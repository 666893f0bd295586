use approx::assert_relative_eq;
use std::f64::consts::PI;
use windmill::rendering::{DrawCommand, RecordingSurface};
use windmill::{AnimationScheduler, PixmapSurface};

use crate::common::{angle_about, create_test_config, TestSimBuilder};

#[test]
fn test_blades_spaced_at_rest() {
    let mut sim = TestSimBuilder::new().build();
    sim.scheduler.draw(&mut sim.surface).unwrap();

    let center = glam::Vec2::new(200.0, 200.0);
    let tips: Vec<f64> = sim
        .surface
        .filled_paths()
        .map(|path| angle_about(center, path.vertices()[1]))
        .collect();

    assert_eq!(tips.len(), 3);
    assert_relative_eq!(tips[0], 0.0, epsilon = 1e-4);
    assert_relative_eq!(tips[1], 2.0 * PI / 3.0, epsilon = 1e-4);
    assert_relative_eq!(tips[2], 4.0 * PI / 3.0, epsilon = 1e-4);
}

#[test]
fn test_render_is_idempotent() {
    let mut sim = TestSimBuilder::new().build();
    sim.start();
    sim.run_steps(12);

    let mut first = RecordingSurface::new(400.0, 400.0);
    let mut second = RecordingSurface::new(400.0, 400.0);
    sim.scheduler.draw(&mut first).unwrap();
    sim.scheduler.draw(&mut second).unwrap();
    // Drawing twice into the same surface starts over from a clear
    sim.scheduler.draw(&mut second).unwrap();

    assert_eq!(first.commands(), second.commands());
    assert_eq!(first.commands(), sim.surface.commands());
}

#[test]
fn test_tick_draws_full_frame() {
    let mut sim = TestSimBuilder::new().build();
    sim.start();
    sim.run_frame();

    let commands = sim.surface.commands();
    assert_eq!(commands[0], DrawCommand::Clear);
    assert_eq!(sim.surface.polylines().count(), 20);
    assert_eq!(sim.surface.filled_paths().count(), 3);
    assert!(matches!(commands.last(), Some(DrawCommand::Circle { .. })));
}

#[test]
fn test_raster_frame_colors() {
    let scheduler = AnimationScheduler::new(create_test_config()).unwrap();
    let mut surface = PixmapSurface::new(400, 400).unwrap();
    scheduler.draw(&mut surface).unwrap();

    // Inside the blade pointing along +x
    let blade = surface.pixel(280, 203).unwrap();
    assert_eq!((blade.red(), blade.green(), blade.blue()), (0, 123, 255));
    assert_eq!(blade.alpha(), 255);

    // Hub center
    let hub = surface.pixel(200, 200).unwrap();
    assert_eq!((hub.red(), hub.green(), hub.blue()), (128, 128, 128));

    // Corners stay clear
    assert_eq!(surface.pixel(0, 0).unwrap().alpha(), 0);
    assert_eq!(surface.pixel(399, 399).unwrap().alpha(), 0);
}
