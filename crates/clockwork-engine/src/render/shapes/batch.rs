use std::ops::Range;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::circle::CircleRenderer;
use super::line::LineRenderer;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ShapeKind {
    Circle,
    Line,
}

/// A run of consecutive same-kind instances in paint order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Batch {
    kind: ShapeKind,
    instances: Range<u32>,
}

/// Draws a whole `DrawList` in paint order.
///
/// Commands are grouped into runs of the same shape kind. Each run becomes one
/// instanced draw, so a circle recorded between two lines still lands between
/// them on screen.
pub struct ShapeRenderer {
    circles: CircleRenderer,
    lines: LineRenderer,
    batches: Vec<Batch>,
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self {
            circles: CircleRenderer::new(),
            lines: LineRenderer::new(),
            batches: Vec::new(),
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.record(draw_list);

        self.circles.upload(ctx);
        self.lines.upload(ctx);

        for batch in &self.batches {
            match batch.kind {
                ShapeKind::Circle => self.circles.draw(target, batch.instances.clone()),
                ShapeKind::Line => self.lines.draw(target, batch.instances.clone()),
            }
        }
    }

    fn record(&mut self, draw_list: &mut DrawList) {
        self.circles.clear();
        self.lines.clear();
        self.batches.clear();

        for item in draw_list.iter_in_paint_order() {
            let (kind, instances) = match &item.cmd {
                DrawCmd::Circle(cmd) => {
                    let start = self.circles.len();
                    self.circles.push(cmd);
                    (ShapeKind::Circle, start..self.circles.len())
                }
                DrawCmd::Line(cmd) => {
                    let start = self.lines.len();
                    self.lines.push(cmd);
                    (ShapeKind::Line, start..self.lines.len())
                }
            };

            if instances.is_empty() {
                continue;
            }
            match self.batches.last_mut() {
                Some(last) if last.kind == kind => last.instances.end = instances.end,
                _ => self.batches.push(Batch { kind, instances }),
            }
        }

        log::trace!(
            "shape batches: {} ({} circles, {} lines)",
            self.batches.len(),
            self.circles.len(),
            self.lines.len()
        );
    }
}

impl Default for ShapeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::{Shadow, ZIndex};

    fn batch(kind: ShapeKind, instances: Range<u32>) -> Batch {
        Batch { kind, instances }
    }

    fn line(dl: &mut DrawList, z: i32) {
        dl.push_line(ZIndex::new(z), Vec2::zero(), Vec2::new(10.0, 0.0), 1.0, Color::BLACK);
    }

    fn circle(dl: &mut DrawList, z: i32) {
        dl.push_circle(ZIndex::new(z), Vec2::zero(), 5.0, Color::BLACK, None, None);
    }

    fn batches_for(dl: &mut DrawList) -> Vec<Batch> {
        let mut renderer = ShapeRenderer::new();
        renderer.record(dl);
        renderer.batches.clone()
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn circle_between_lines_stays_between_them() {
        let mut dl = DrawList::new();
        line(&mut dl, 0);
        circle(&mut dl, 1);
        line(&mut dl, 2);

        assert_eq!(
            batches_for(&mut dl),
            vec![
                batch(ShapeKind::Line, 0..1),
                batch(ShapeKind::Circle, 0..1),
                batch(ShapeKind::Line, 1..2),
            ]
        );
    }

    #[test]
    fn batches_follow_z_not_insertion_order() {
        let mut dl = DrawList::new();
        circle(&mut dl, 5);
        line(&mut dl, 0);

        assert_eq!(
            batches_for(&mut dl),
            vec![batch(ShapeKind::Line, 0..1), batch(ShapeKind::Circle, 0..1)]
        );
    }

    #[test]
    fn same_kind_runs_share_one_batch() {
        let mut dl = DrawList::new();
        let shadow = Shadow::new(10.0, Vec2::zero(), Color::from_srgb_u8(0, 0, 0, 80));
        dl.push_circle(ZIndex::new(0), Vec2::zero(), 100.0, Color::WHITE, None, Some(shadow));
        circle(&mut dl, 1);
        for z in 2..5 {
            line(&mut dl, z);
        }

        // The shadow adds a second instance to the first circle.
        assert_eq!(
            batches_for(&mut dl),
            vec![batch(ShapeKind::Circle, 0..3), batch(ShapeKind::Line, 0..3)]
        );
    }

    #[test]
    fn commands_without_instances_do_not_split_a_run() {
        let mut dl = DrawList::new();
        line(&mut dl, 0);
        dl.push_circle(ZIndex::new(1), Vec2::zero(), 0.0, Color::BLACK, None, None);
        line(&mut dl, 2);

        assert_eq!(batches_for(&mut dl), vec![batch(ShapeKind::Line, 0..2)]);
    }

    #[test]
    fn empty_list_has_no_batches() {
        assert!(batches_for(&mut DrawList::new()).is_empty());
    }
}
