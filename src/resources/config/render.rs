use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rendering::Rgba;
use crate::utils::{CANVAS_SIZE, HUB_RADIUS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub hub_radius: f32,
    pub particle_color: Rgba,
    pub blade_fill: Rgba,
    pub blade_stroke: Rgba,
    pub hub_fill: Rgba,
    pub hub_stroke: Rgba,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: CANVAS_SIZE as u32,
            screen_height: CANVAS_SIZE as u32,
            hub_radius: HUB_RADIUS,
            particle_color: Rgba::rgb(200, 200, 255),
            blade_fill: Rgba::rgb(0x00, 0x7B, 0xFF),
            blade_stroke: Rgba::BLACK,
            hub_fill: Rgba::rgb(128, 128, 128),
            hub_stroke: Rgba::BLACK,
        }
    }
}

impl RenderConfig {
    pub fn screen_dims(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }

    /// Rotation center in surface coordinates
    pub fn center(&self) -> Vec2 {
        self.screen_dims() / 2.0
    }
}
