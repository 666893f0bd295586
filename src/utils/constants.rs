use std::f64::consts::TAU;

// Rotor
pub const NUM_BLADES: usize = 3;
pub const INERTIA_FACTOR: f64 = 3.0; // point masses at the blade tips
pub const FRAME_RATE: f64 = 120.0; // logical ticks per second [Hz]
pub const TIME_STEP: f64 = 1.0 / FRAME_RATE; // [s]

pub const DEFAULT_RADIUS: f64 = 1.0; // [m]
pub const DEFAULT_MASS: f64 = 1.0; // [kg]
pub const DEFAULT_ANGULAR_VELOCITY: f64 = 5.0; // [rad/s]
pub const RADIUS_RANGE: [f64; 2] = [0.5, 3.0];
pub const MASS_RANGE: [f64; 2] = [0.5, 5.0];

// Wind particles
pub const WIND_THRESHOLD: f64 = 2.0; // [rad/s]
pub const PARTICLES_PER_RAD_S: f64 = 4.0;
pub const MAX_PARTICLES: usize = 150;
pub const INITIAL_PARTICLES: usize = 50;
pub const PARTICLE_SPIN_SCALE: f64 = 0.005; // applied once per tick
pub const ORBIT_RADIUS_RANGE: [f64; 2] = [50.0, 130.0];
pub const TRAIL_LENGTH_RANGE: [f64; 2] = [15.0, 30.0];
pub const OPACITY_RANGE: [f64; 2] = [0.5, 1.0];
pub const FULL_TURN: f64 = TAU;

// Scene
pub const CANVAS_SIZE: f32 = 400.0;
pub const HUB_RADIUS: f32 = 18.0;
pub const MIN_BLADE_LENGTH: f64 = 50.0;
pub const BLADE_LENGTH_PER_RADIUS: f64 = 120.0;
pub const MIN_BLADE_WIDTH: f64 = 10.0;
pub const BLADE_WIDTH_PER_MASS: f64 = 15.0;
pub const BLADE_STROKE_WIDTH: f32 = 2.0;
pub const PARTICLE_STROKE_WIDTH: f32 = 3.0;
