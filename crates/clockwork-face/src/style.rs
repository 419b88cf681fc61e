use clockwork_engine::paint::Color;

/// Appearance of the clock face.
///
/// Start from [`ClockStyle::default`] and override fields with the builder setters:
///
/// ```rust,ignore
/// let style = ClockStyle::default()
///     .radius(140.0)
///     .quarter_line_color(Color::BLACK);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    /// Face radius in logical pixels.
    pub radius: f32,
    /// First tick angle, degrees.
    pub starting_angle: i32,
    /// Last tick angle (inclusive), degrees.
    pub ending_angle: i32,
    /// Accepted for configuration compatibility; ticks always draw with a 1px stroke.
    pub line_stroke: f32,
    pub minor_line_color: Color,
    pub minor_line_length: f32,
    pub quarter_line_color: Color,
    pub quarter_line_length: f32,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            radius:              100.0,
            starting_angle:      0,
            ending_angle:        360,
            line_stroke:         5.0,
            minor_line_color:    Color::LIGHT_GRAY,
            minor_line_length:   10.0,
            quarter_line_color:  Color::RED,
            quarter_line_length: 20.0,
        }
    }
}

impl ClockStyle {
    pub fn radius(mut self, r: f32) -> Self {
        self.radius = r;
        self
    }

    /// Sets the inclusive tick range in degrees.
    pub fn angles(mut self, start: i32, end: i32) -> Self {
        self.starting_angle = start;
        self.ending_angle = end;
        self
    }

    pub fn line_stroke(mut self, w: f32) -> Self {
        self.line_stroke = w;
        self
    }

    pub fn minor_line_color(mut self, c: Color) -> Self {
        self.minor_line_color = c;
        self
    }

    pub fn minor_line_length(mut self, len: f32) -> Self {
        self.minor_line_length = len;
        self
    }

    pub fn quarter_line_color(mut self, c: Color) -> Self {
        self.quarter_line_color = c;
        self
    }

    pub fn quarter_line_length(mut self, len: f32) -> Self {
        self.quarter_line_length = len;
        self
    }

    /// Color and length of a tick of the given kind.
    pub fn tick_appearance(&self, kind: LineStyle) -> (Color, f32) {
        match kind {
            LineStyle::Minor => (self.minor_line_color, self.minor_line_length),
            LineStyle::Quarter => (self.quarter_line_color, self.quarter_line_length),
        }
    }
}

/// Which tick appearance an angle uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LineStyle {
    Minor,
    /// 12, 3, 6 and 9 o'clock.
    Quarter,
}

impl LineStyle {
    /// `Quarter` for multiples of 90 degrees (negative ones included), `Minor` otherwise.
    #[inline]
    pub fn for_angle(degrees: i32) -> Self {
        if degrees % 90 == 0 { LineStyle::Quarter } else { LineStyle::Minor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = ClockStyle::default();
        assert_eq!(s.radius, 100.0);
        assert_eq!(s.starting_angle, 0);
        assert_eq!(s.ending_angle, 360);
        assert_eq!(s.line_stroke, 5.0);
        assert_eq!(s.minor_line_color, Color::LIGHT_GRAY);
        assert_eq!(s.minor_line_length, 10.0);
        assert_eq!(s.quarter_line_color, Color::RED);
        assert_eq!(s.quarter_line_length, 20.0);
    }

    #[test]
    fn setters_override_only_their_field() {
        let s = ClockStyle::default().radius(150.0).angles(90, 180);
        assert_eq!(s.radius, 150.0);
        assert_eq!((s.starting_angle, s.ending_angle), (90, 180));
        assert_eq!(s.quarter_line_length, 20.0);
    }

    #[test]
    fn tick_appearance_by_kind() {
        let s = ClockStyle::default().minor_line_length(7.0);
        assert_eq!(s.tick_appearance(LineStyle::Minor), (Color::LIGHT_GRAY, 7.0));
        assert_eq!(s.tick_appearance(LineStyle::Quarter), (Color::RED, 20.0));
    }

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn quarters_every_ninety_degrees() {
        for deg in [-270, -180, -90, 0, 90, 180, 270, 360, 450, 720] {
            assert_eq!(LineStyle::for_angle(deg), LineStyle::Quarter, "{deg}");
        }
    }

    #[test]
    fn classification_is_periodic() {
        for deg in -720..=720 {
            assert_eq!(LineStyle::for_angle(deg), LineStyle::for_angle(deg + 90), "{deg}");
        }
        for deg in [30, 60, 120, 150, 330, -30, 1, 89] {
            assert_eq!(LineStyle::for_angle(deg), LineStyle::Minor, "{deg}");
        }
    }
}
