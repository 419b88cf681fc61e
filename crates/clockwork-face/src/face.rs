use clockwork_engine::coords::Vec2;
use clockwork_engine::paint::Color;
use clockwork_engine::scene::{Border, Shadow};

use crate::geometry::{point_on_circle, tick_angles, HandAngles};
use crate::painter::Painter;
use crate::sample::TimeSample;
use crate::style::{ClockStyle, LineStyle};

pub const FACE_COLOR: Color = Color::WHITE;
pub const FACE_BORDER_WIDTH: f32 = 2.0;
pub const FACE_SHADOW_BLUR: f32 = 100.0;
pub const PIVOT_RADIUS: f32 = 5.0;
pub const PIVOT_COLOR: Color = Color::BLACK;
pub const TICK_STROKE: f32 = 1.0;
/// Distance from the center at which every hand starts.
pub const HAND_OFFSET: f32 = 15.0;

/// Straight black, alpha 80/255.
fn face_shadow_color() -> Color {
    Color::from_srgb_u8(0, 0, 0, 80)
}

/// Length and look of one hand. The hand ends `inset` short of the face radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub inset: f32,
    pub stroke: f32,
    pub color: Color,
}

pub const HOUR_HAND: HandStyle = HandStyle { inset: 40.0, stroke: 6.0, color: Color::BLACK };
pub const MINUTE_HAND: HandStyle = HandStyle { inset: 30.0, stroke: 6.0, color: Color::BLACK };
pub const SECOND_HAND: HandStyle = HandStyle { inset: 25.0, stroke: 3.0, color: Color::RED };

/// Analog clock face.
///
/// [`paint`](Self::paint) is a pure function of the sample and the style: it
/// records the whole face from scratch, back to front:
///
/// 1. face disc (white, 2px rim, soft shadow)
/// 2. center pivot
/// 3. ticks, one per 30 degrees across the style's angle range
/// 4. hour, minute and second hands
#[derive(Debug, Clone, Default)]
pub struct ClockFace {
    pub style: ClockStyle,
}

impl ClockFace {
    pub fn new(style: ClockStyle) -> Self {
        Self { style }
    }

    pub fn paint(&self, painter: &mut Painter<'_>, center: Vec2, time: TimeSample) {
        let radius = self.style.radius;

        painter.fill_circle(
            center,
            radius,
            FACE_COLOR,
            Some(Border::new(FACE_BORDER_WIDTH, FACE_COLOR)),
            Some(Shadow::new(FACE_SHADOW_BLUR, Vec2::zero(), face_shadow_color())),
        );

        painter.fill_circle(center, PIVOT_RADIUS, PIVOT_COLOR, None, None);

        for angle in tick_angles(&self.style) {
            let (color, length) = self.style.tick_appearance(LineStyle::for_angle(angle));
            painter.stroke_line(
                point_on_circle(center, radius - length, angle),
                point_on_circle(center, radius, angle),
                TICK_STROKE,
                color,
            );
        }

        let angles = HandAngles::from_sample(time);
        self.paint_hand(painter, center, angles.hour, HOUR_HAND);
        self.paint_hand(painter, center, angles.minute, MINUTE_HAND);
        self.paint_hand(painter, center, angles.second, SECOND_HAND);
    }

    fn paint_hand(&self, painter: &mut Painter<'_>, center: Vec2, degrees: i32, hand: HandStyle) {
        painter.stroke_line(
            point_on_circle(center, HAND_OFFSET, degrees),
            point_on_circle(center, self.style.radius - hand.inset, degrees),
            hand.stroke,
            hand.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clockwork_engine::scene::{CircleCmd, DrawCmd, DrawList, LineCmd};

    const CENTER: Vec2 = Vec2::new(200.0, 200.0);

    fn record(face: &ClockFace, t: TimeSample) -> Vec<DrawCmd> {
        let mut dl = DrawList::new();
        face.paint(&mut Painter::new(&mut dl), CENTER, t);
        dl.iter_in_paint_order().map(|i| i.cmd.clone()).collect()
    }

    fn circles(cmds: &[DrawCmd]) -> Vec<&CircleCmd> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Circle(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    fn lines(cmds: &[DrawCmd]) -> Vec<&LineCmd> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    fn near(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── command stream ────────────────────────────────────────────────────

    #[test]
    fn fixed_command_sequence() {
        let cmds = record(&ClockFace::default(), TimeSample::PREVIEW);
        // face + pivot + 13 ticks + 3 hands
        assert_eq!(cmds.len(), 18);
        assert!(matches!(cmds[0], DrawCmd::Circle(_)));
        assert!(matches!(cmds[1], DrawCmd::Circle(_)));
        assert!(cmds[2..].iter().all(|c| matches!(c, DrawCmd::Line(_))));
    }

    #[test]
    fn same_input_same_output() {
        let face = ClockFace::default();
        let t = TimeSample::new(9, 15, 30);
        assert_eq!(record(&face, t), record(&face, t));
    }

    #[test]
    fn face_and_pivot() {
        let cmds = record(&ClockFace::default(), TimeSample::PREVIEW);
        let c = circles(&cmds);

        assert_eq!(c[0].center, CENTER);
        assert_eq!(c[0].radius, 100.0);
        assert_eq!(c[0].fill, Color::WHITE);
        assert_eq!(c[0].border.map(|b| b.width), Some(FACE_BORDER_WIDTH));
        let shadow = c[0].shadow.expect("face has a shadow");
        assert_eq!(shadow.blur, FACE_SHADOW_BLUR);
        assert_eq!(shadow.offset, Vec2::zero());

        assert_eq!(c[1].center, CENTER);
        assert_eq!(c[1].radius, PIVOT_RADIUS);
        assert_eq!(c[1].fill, Color::BLACK);
        assert!(c[1].shadow.is_none());
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn quarter_and_minor_ticks() {
        let cmds = record(&ClockFace::default(), TimeSample::PREVIEW);
        let l = lines(&cmds);

        // 0 degrees: quarter, 20px long, pointing right.
        assert_eq!(l[0].color, Color::RED);
        assert!(near(l[0].start, Vec2::new(280.0, 200.0)));
        assert!(near(l[0].end, Vec2::new(300.0, 200.0)));
        assert_eq!(l[0].width, TICK_STROKE);

        // 30 degrees: minor, 10px long.
        assert_eq!(l[1].color, Color::LIGHT_GRAY);
        assert!((l[1].length() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn tick_range_follows_style() {
        let face = ClockFace::new(ClockStyle::default().angles(0, 90));
        let cmds = record(&face, TimeSample::PREVIEW);
        assert_eq!(lines(&cmds).len(), 4 + 3);
    }

    // ── hands ─────────────────────────────────────────────────────────────

    #[test]
    fn three_oclock_hands() {
        let cmds = record(&ClockFace::default(), TimeSample::new(3, 0, 0));
        let l = lines(&cmds);
        let (hour, minute, second) = (l[13], l[14], l[15]);

        assert!(near(hour.start, Vec2::new(215.0, 200.0)));
        assert!(near(hour.end, Vec2::new(260.0, 200.0)));
        assert_eq!(hour.width, 6.0);
        assert_eq!(hour.color, Color::BLACK);

        assert!(near(minute.end, Vec2::new(200.0, 130.0)));

        assert!(near(second.start, Vec2::new(200.0, 185.0)));
        assert!(near(second.end, Vec2::new(200.0, 125.0)));
        assert_eq!(second.width, 3.0);
        assert_eq!(second.color, Color::RED);
    }

    #[test]
    fn hands_scale_with_radius() {
        let face = ClockFace::new(ClockStyle::default().radius(150.0));
        let cmds = record(&face, TimeSample::new(6, 0, 15));
        let l = lines(&cmds);
        // hour at 90 degrees (down), second at 0 degrees (right)
        assert!(near(l[13].end, Vec2::new(200.0, 310.0)));
        assert!(near(l[15].end, Vec2::new(325.0, 200.0)));
    }
}
