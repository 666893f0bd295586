use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color with a floating point alpha, the way canvas `rgba()` strings read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    LineTo(Vec2),
    QuadTo { control: Vec2, to: Vec2 },
}

/// Closed outline made of straight and quadratic segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePath {
    pub start: Vec2,
    pub segments: Vec<PathSegment>,
}

impl ShapePath {
    pub fn new(start: Vec2) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    pub fn line_to(mut self, to: Vec2) -> Self {
        self.segments.push(PathSegment::LineTo(to));
        self
    }

    pub fn quad_to(mut self, control: Vec2, to: Vec2) -> Self {
        self.segments.push(PathSegment::QuadTo { control, to });
        self
    }

    /// Every end point of the outline, starting point first
    pub fn vertices(&self) -> Vec<Vec2> {
        std::iter::once(self.start)
            .chain(self.segments.iter().map(|segment| match segment {
                PathSegment::LineTo(to) => *to,
                PathSegment::QuadTo { to, .. } => *to,
            }))
            .collect()
    }
}

/// One primitive issued to a [`crate::rendering::DrawSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear,
    Polyline {
        points: Vec<Vec2>,
        stroke: StrokeStyle,
    },
    FillPath {
        path: ShapePath,
        fill: Rgba,
        stroke: Option<StrokeStyle>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Rgba,
        stroke: Option<StrokeStyle>,
    },
}
