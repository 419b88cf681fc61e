use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Border, Shadow};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Color,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
}

impl CircleCmd {
    #[inline]
    pub fn new(
        center: Vec2,
        radius: f32,
        fill: Color,
        border: Option<Border>,
        shadow: Option<Shadow>,
    ) -> Self {
        Self { center, radius, fill, border, shadow }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Color,
        border: Option<Border>,
        shadow: Option<Shadow>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, fill, border, shadow)));
    }
}
