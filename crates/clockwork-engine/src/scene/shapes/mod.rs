pub(crate) mod circle;
pub(crate) mod line;

pub use circle::CircleCmd;
pub use line::LineCmd;

use crate::coords::Vec2;
use crate::paint::Color;

/// Stroke drawn along the outer edge of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Soft shadow cast behind a shape.
///
/// `blur` is the distance over which the shadow fades out, in logical pixels.
/// Renderers approximate a Gaussian falloff; exact blur kernels are not promised.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub blur: f32,
    pub offset: Vec2,
    pub color: Color,
}

impl Shadow {
    #[inline]
    pub fn new(blur: f32, offset: Vec2, color: Color) -> Self {
        Self { blur, offset, color }
    }
}
