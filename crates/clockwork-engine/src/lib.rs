//! Clockwork engine crate.
//!
//! This crate owns the platform + GPU runtime pieces the clock face draws through:
//! a renderer-agnostic draw list, wgpu shape renderers and a winit window loop.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
