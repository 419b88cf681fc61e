//! Clockwork face: an analog clock drawn on top of `clockwork-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use clockwork_face::prelude::*;
//!
//! ClockApplication::new()
//!     .title("Clock")
//!     .style(ClockStyle::default().radius(120.0))
//!     .run();
//! ```
//!
//! # Drawing without a window
//!
//! The face is a pure function of a [`TimeSample`] and a [`ClockStyle`]; record it
//! into any `DrawList`:
//!
//! ```rust,ignore
//! let mut draw_list = DrawList::new();
//! ClockFace::default().paint(
//!     &mut Painter::new(&mut draw_list),
//!     Vec2::new(200.0, 200.0),
//!     TimeSample::new(10, 43, 23),
//! );
//! ```
//!
//! # Sampling
//!
//! [`TimeSampler`] reads a [`TimeSource`] every 500 ms and publishes into a
//! single-slot [`SampleCell`]. Inside the window loop it is polled per frame;
//! headless callers can iterate [`TimeSampler::into_samples`] instead.

pub mod app;
pub mod cell;
pub mod face;
pub mod geometry;
pub mod painter;
pub mod sample;
pub mod sampler;
pub mod style;

pub use app::ClockApplication;
pub use cell::SampleCell;
pub use face::ClockFace;
pub use sample::{FixedTimeSource, LocalTimeSource, ParseTimeError, TimeSample, TimeSource};
pub use sampler::{Samples, TimeSampler, SAMPLE_INTERVAL};
pub use style::{ClockStyle, LineStyle};

/// Everything needed to build, style and drive a clock.
pub mod prelude {
    pub use crate::app::ClockApplication;
    pub use crate::cell::SampleCell;
    pub use crate::face::{ClockFace, HandStyle};
    pub use crate::geometry::HandAngles;
    pub use crate::painter::Painter;
    pub use crate::sample::{FixedTimeSource, LocalTimeSource, TimeSample, TimeSource};
    pub use crate::sampler::TimeSampler;
    pub use crate::style::{ClockStyle, LineStyle};

    // Engine primitives the face API takes.
    pub use clockwork_engine::coords::Vec2;
    pub use clockwork_engine::paint::Color;
    pub use clockwork_engine::scene::DrawList;
}
