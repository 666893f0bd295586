use glam::Vec2;
use std::f64::consts::TAU;

use crate::rendering::surface::DrawSurface;
use crate::rendering::types::{ShapePath, StrokeStyle};
use crate::resources::config::RenderConfig;
use crate::state::PhysicsState;
use crate::utils::errors::SimError;
use crate::utils::{
    polar_offset, BLADE_LENGTH_PER_RADIUS, BLADE_STROKE_WIDTH, BLADE_WIDTH_PER_MASS,
    MIN_BLADE_LENGTH, MIN_BLADE_WIDTH, NUM_BLADES, PARTICLE_STROKE_WIDTH,
};
use crate::wind::{WindParticle, WindParticleField};

// Blade outline, as (fraction of blade length, angle offset in radians)
const LEADING_EDGE: (f64, f64) = (0.6, 0.3);
const TRAILING_EDGE: (f64, f64) = (0.2, -0.4);

/// On-screen blade length for a rotor radius [px]
pub fn blade_length(radius: f64) -> f64 {
    (radius * BLADE_LENGTH_PER_RADIUS).max(MIN_BLADE_LENGTH)
}

/// Blade width for a rotor mass. Shown as a readout; the outline does not use it.
pub fn blade_width(mass: f64) -> f64 {
    (mass * BLADE_WIDTH_PER_MASS).max(MIN_BLADE_WIDTH)
}

/// Angles of every blade, evenly spaced from `blade_angle`
pub fn blade_angles(blade_angle: f64) -> [f64; NUM_BLADES] {
    std::array::from_fn(|i| blade_angle + i as f64 * (TAU / NUM_BLADES as f64))
}

/// Scythe-shaped blade: hub center, curved leading edge out to the tip, then
/// back in to a short trailing point.
pub fn blade_outline(center: Vec2, angle: f64, length: f64) -> ShapePath {
    let tip = polar_offset(center, length, angle);
    let control = polar_offset(center, length * LEADING_EDGE.0, angle + LEADING_EDGE.1);
    let trailing = polar_offset(center, length * TRAILING_EDGE.0, angle + TRAILING_EDGE.1);

    ShapePath::new(center)
        .quad_to(control, tip)
        .line_to(trailing)
}

/// Head and tail of a particle's streak
pub fn particle_trail(center: Vec2, particle: &WindParticle) -> [Vec2; 2] {
    [
        polar_offset(center, particle.orbit_radius, particle.phase_angle),
        polar_offset(
            center,
            particle.orbit_radius - particle.trail_length,
            particle.phase_angle,
        ),
    ]
}

/// Draws the rotor scene. Holds configuration only, so rendering the same
/// state twice issues the same commands.
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    config: RenderConfig,
    wind_threshold: f64,
}

impl SceneRenderer {
    pub fn new(config: RenderConfig, wind_threshold: f64) -> Self {
        Self {
            config,
            wind_threshold,
        }
    }

    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        state: &PhysicsState,
        field: &WindParticleField,
    ) -> Result<(), SimError> {
        let center = self.config.center();
        surface.clear()?;

        if state.angular_velocity() > self.wind_threshold {
            self.draw_wind(surface, center, field)?;
        }

        let length = blade_length(state.radius());
        let outline_stroke = StrokeStyle {
            color: self.config.blade_stroke,
            width: BLADE_STROKE_WIDTH,
        };
        for angle in blade_angles(state.blade_angle()) {
            surface.fill_path(
                &blade_outline(center, angle, length),
                self.config.blade_fill,
                Some(outline_stroke),
            )?;
        }

        // Hub goes on top of the blade roots
        surface.draw_circle(
            center,
            self.config.hub_radius,
            self.config.hub_fill,
            Some(StrokeStyle {
                color: self.config.hub_stroke,
                width: BLADE_STROKE_WIDTH,
            }),
        )
    }

    fn draw_wind<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        center: Vec2,
        field: &WindParticleField,
    ) -> Result<(), SimError> {
        for particle in field.particles() {
            let stroke = StrokeStyle {
                color: self.config.particle_color.with_alpha(particle.opacity as f32),
                width: PARTICLE_STROKE_WIDTH,
            };
            surface.stroke_polyline(&particle_trail(center, particle), stroke)?;
        }
        Ok(())
    }
}
