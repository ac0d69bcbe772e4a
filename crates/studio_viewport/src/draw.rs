//! Draw commands handed to the drawing surface.

use studio_math::Vec2;

/// 8-bit RGB colour.
pub type Rgb8 = [u8; 3];

/// A single filled shape in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Polygon { points: [Vec2; 3], colour: Rgb8 },
    Circle { centre: Vec2, radius: f32, colour: Rgb8 },
}

impl DrawCommand {
    pub fn colour(&self) -> Rgb8 {
        match self {
            DrawCommand::Polygon { colour, .. } | DrawCommand::Circle { colour, .. } => *colour,
        }
    }
}

/// One rendered frame: fill with `background`, then draw `commands` in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub background: Rgb8,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands.len() - self.polygon_count()
    }
}
