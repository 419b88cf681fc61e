//! Shape renderers.
//!
//! Each per-kind renderer draws only its own `DrawCmd` variant.
//! [`ShapeRenderer`] drives them over a whole `DrawList`, switching between
//! kinds as often as paint order requires.

mod batch;
mod circle;
mod common;
mod line;

pub use batch::ShapeRenderer;
