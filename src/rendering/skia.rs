use glam::Vec2;
use tiny_skia::*;

use crate::rendering::surface::DrawSurface;
use crate::rendering::types::{PathSegment, Rgba, ShapePath, StrokeStyle};
use crate::utils::errors::SimError;

/// Raster surface backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    canvas: Pixmap,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, SimError> {
        let canvas = Pixmap::new(width, height)
            .ok_or_else(|| SimError::RenderError("Failed to create canvas".into()))?;
        Ok(Self { canvas })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.canvas
    }

    /// Demultiplied color at pixel `(x, y)`, if inside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        self.canvas.pixel(x, y).map(|p| p.demultiply())
    }
}

fn paint_for(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.alpha_u8());
    paint.anti_alias = true;
    paint
}

fn stroke_for(style: &StrokeStyle) -> Stroke {
    let mut stroke = Stroke::default();
    stroke.width = style.width;
    stroke
}

fn build_shape(shape: &ShapePath) -> Result<Path, SimError> {
    let mut pb = PathBuilder::new();
    pb.move_to(shape.start.x, shape.start.y);
    for segment in &shape.segments {
        match segment {
            PathSegment::LineTo(to) => pb.line_to(to.x, to.y),
            PathSegment::QuadTo { control, to } => pb.quad_to(control.x, control.y, to.x, to.y),
        }
    }
    pb.close();
    pb.finish()
        .ok_or_else(|| SimError::RenderError("Failed to build shape path".into()))
}

impl DrawSurface for PixmapSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) -> Result<(), SimError> {
        self.canvas.fill(Color::TRANSPARENT);
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: StrokeStyle) -> Result<(), SimError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for point in rest {
            pb.line_to(point.x, point.y);
        }
        let path = pb
            .finish()
            .ok_or_else(|| SimError::RenderError("Failed to build polyline".into()))?;

        self.canvas.stroke_path(
            &path,
            &paint_for(stroke.color),
            &stroke_for(&stroke),
            Transform::identity(),
            None,
        );
        Ok(())
    }

    fn fill_path(
        &mut self,
        path: &ShapePath,
        fill: Rgba,
        stroke: Option<StrokeStyle>,
    ) -> Result<(), SimError> {
        let path = build_shape(path)?;

        self.canvas.fill_path(
            &path,
            &paint_for(fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        if let Some(style) = stroke {
            self.canvas.stroke_path(
                &path,
                &paint_for(style.color),
                &stroke_for(&style),
                Transform::identity(),
                None,
            );
        }
        Ok(())
    }

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: Rgba,
        stroke: Option<StrokeStyle>,
    ) -> Result<(), SimError> {
        let circle = PathBuilder::from_circle(center.x, center.y, radius)
            .ok_or_else(|| SimError::RenderError(format!("Invalid circle radius {radius}")))?;

        self.canvas.fill_path(
            &circle,
            &paint_for(fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        if let Some(style) = stroke {
            self.canvas.stroke_path(
                &circle,
                &paint_for(style.color),
                &stroke_for(&style),
                Transform::identity(),
                None,
            );
        }
        Ok(())
    }
}
