use glam::Vec2;

use crate::rendering::types::{DrawCommand, Rgba, ShapePath, StrokeStyle};
use crate::utils::errors::SimError;

/// Immediate-mode 2D drawing target.
///
/// Coordinates are logical units with the origin in the top-left corner and y
/// growing downwards.
pub trait DrawSurface {
    fn size(&self) -> Vec2;

    fn clear(&mut self) -> Result<(), SimError>;

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: StrokeStyle) -> Result<(), SimError>;

    fn fill_path(
        &mut self,
        path: &ShapePath,
        fill: Rgba,
        stroke: Option<StrokeStyle>,
    ) -> Result<(), SimError>;

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: Rgba,
        stroke: Option<StrokeStyle>,
    ) -> Result<(), SimError>;
}

/// Surface that keeps every command it receives, in order.
///
/// `clear` drops the previously recorded frame so `commands` always holds the
/// most recent frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[Vec2], &StrokeStyle)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Polyline { points, stroke } => Some((points.as_slice(), stroke)),
            _ => None,
        })
    }

    pub fn filled_paths(&self) -> impl Iterator<Item = &ShapePath> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillPath { path, .. } => Some(path),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) -> Result<(), SimError> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: StrokeStyle) -> Result<(), SimError> {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
        Ok(())
    }

    fn fill_path(
        &mut self,
        path: &ShapePath,
        fill: Rgba,
        stroke: Option<StrokeStyle>,
    ) -> Result<(), SimError> {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            fill,
            stroke,
        });
        Ok(())
    }

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: Rgba,
        stroke: Option<StrokeStyle>,
    ) -> Result<(), SimError> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
        });
        Ok(())
    }
}
