use clockwork_engine::coords::Vec2;
use clockwork_engine::paint::Color;
use clockwork_engine::scene::{Border, DrawList, Shadow, ZIndex};

/// Drawing surface handed to [`ClockFace::paint`](crate::ClockFace::paint).
///
/// Wraps the engine's `DrawList`. Every call lands one z-layer above the previous
/// one, so primitives stack in the order they are issued.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Filled circle with optional border and drop shadow.
    pub fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        border: Option<Border>,
        shadow: Option<Shadow>,
    ) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, color, border, shadow);
    }

    /// Straight segment with butt caps.
    pub fn stroke_line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_line(z, start, end, width, color);
    }

    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clockwork_engine::scene::DrawCmd;

    #[test]
    fn calls_stack_in_issue_order() {
        let mut dl = DrawList::new();
        {
            let mut p = Painter::new(&mut dl);
            p.stroke_line(Vec2::zero(), Vec2::new(1.0, 0.0), 1.0, Color::BLACK);
            p.fill_circle(Vec2::zero(), 4.0, Color::WHITE, None, None);
        }

        let zs: Vec<i32> = dl.iter_in_paint_order().map(|i| i.key.z.0).collect();
        assert_eq!(zs, vec![0, 1]);

        let kinds: Vec<bool> = dl
            .iter_in_paint_order()
            .map(|i| matches!(i.cmd, DrawCmd::Line(_)))
            .collect();
        assert_eq!(kinds, vec![true, false]);
    }
}
