//! Angle math for the face.
//!
//! Angles are integer degrees measured from +X with y pointing down, so they
//! grow clockwise and -90 is 12 o'clock. Hand angles are returned unwrapped
//! (the hour hand at 23:00 sits at 600); [`point_on_circle`] wraps before use.
//!
//! The hour and minute formulas carry a progress term (`30 * (minute / 60)`,
//! `6 * (second / 60)`) evaluated in integer arithmetic. It truncates to zero for
//! every in-range input, so the hour hand only moves on the hour and the minute
//! hand only on the minute.

use std::f64::consts::PI;

use clockwork_engine::coords::Vec2;

use crate::sample::TimeSample;
use crate::style::ClockStyle;

/// Spacing between ticks.
pub const TICK_STEP_DEGREES: usize = 30;

#[inline]
pub fn hour_hand_degrees(hour: u8, minute: u8) -> i32 {
    let (h, m) = (hour as i32, minute as i32);
    h * 30 + 30 * (m / 60) - 90
}

#[inline]
pub fn minute_hand_degrees(minute: u8, second: u8) -> i32 {
    let (m, s) = (minute as i32, second as i32);
    m * 6 - 90 + 6 * (s / 60)
}

#[inline]
pub fn second_hand_degrees(second: u8) -> i32 {
    second as i32 * 6 - 90
}

/// All three hand angles for one sample.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HandAngles {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl HandAngles {
    pub fn from_sample(t: TimeSample) -> Self {
        Self {
            hour: hour_hand_degrees(t.hour, t.minute),
            minute: minute_hand_degrees(t.minute, t.second),
            second: second_hand_degrees(t.second),
        }
    }
}

/// Normalizes to `0..360`.
#[inline]
pub fn wrap_degrees(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

#[inline]
pub fn degree_to_radian(degrees: i32) -> f32 {
    (degrees as f64 * PI / 180.0) as f32
}

/// Truncates toward zero.
#[inline]
pub fn radian_to_degree(radians: f32) -> i32 {
    (radians as f64 * 180.0 / PI) as i32
}

/// Point `length` away from `center` in direction `degrees`.
pub fn point_on_circle(center: Vec2, length: f32, degrees: i32) -> Vec2 {
    center.offset_polar(length, degree_to_radian(wrap_degrees(degrees)))
}

/// Tick angles from `starting_angle` to `ending_angle` inclusive, every 30 degrees.
///
/// Empty when the range is reversed.
pub fn tick_angles(style: &ClockStyle) -> impl Iterator<Item = i32> {
    (style.starting_angle..=style.ending_angle).step_by(TICK_STEP_DEGREES)
}
