//! Time subsystem.
//!
//! Provides stable, testable timing utilities without coupling to the runtime:
//! - `FrameTime`: per-frame snapshot handed to `core::App::on_frame`
//! - `Ticker`: fixed-interval deadline tracker for apps that redraw on a schedule

mod ticker;

pub use ticker::Ticker;

use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Monotonic timestamp taken when the frame started.
    pub now: Instant,

    /// Monotonic frame counter for the window.
    pub frame_index: u64,
}
