//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and higher
//! layers (the clock face, the studio binary) and the per-frame context they get.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
