use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight line segment with butt caps.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    /// Stroke width in logical pixels, centered on the segment.
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, width: f32, color: Color) -> Self {
        Self { start, end, width, color }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    /// Zero-length or zero-width segments cover no pixels.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.length() <= f32::EPSILON
    }
}

impl DrawList {
    /// Records a line segment draw command.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, start: Vec2, end: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(start, end, width, color)));
    }
}
