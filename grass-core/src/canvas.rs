//! Drawing primitives the simulation needs from a rendering backend.
//!
//! Coordinates are canvas pixels with the origin at the top-left corner
//! and y growing downward.

use glam::Vec2;

use crate::color::Rgb;

/// A surface blades and the scene background are painted onto.
pub trait Canvas {
    /// Fills the axis-aligned rectangle spanned by `min` and `max`.
    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: Rgb);

    /// Strokes a Catmull-Rom spline segment from `points[1]` to `points[2]`,
    /// with `points[0]` and `points[3]` acting as control points.
    fn curve(&mut self, points: [Vec2; 4], stroke_width: f32, color: Rgb);

    /// Draws a round dot of diameter `weight` centered at `pos`.
    fn point(&mut self, pos: Vec2, weight: f32, color: Rgb);
}

/// One recorded call on a [`DrawList`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { min: Vec2, max: Vec2, color: Rgb },
    Curve { points: [Vec2; 4], stroke_width: f32, color: Rgb },
    Point { pos: Vec2, weight: f32, color: Rgb },
}

/// A [`Canvas`] that just records what was drawn, in order.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn curves(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Curve { .. }))
    }

    pub fn points(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Point { .. }))
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: Rgb) {
        self.commands.push(DrawCommand::FillRect { min, max, color });
    }

    fn curve(&mut self, points: [Vec2; 4], stroke_width: f32, color: Rgb) {
        self.commands.push(DrawCommand::Curve {
            points,
            stroke_width,
            color,
        });
    }

    fn point(&mut self, pos: Vec2, weight: f32, color: Rgb) {
        self.commands.push(DrawCommand::Point { pos, weight, color });
    }
}
