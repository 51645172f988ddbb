//! Render targets.
//!
//! A painter flushes its queued [`DrawCmd`](crate::scene::DrawCmd)s into any
//! [`RenderTarget`]. Targets own the mapping from scene units and 0–255 colors
//! to their output format.

mod svg_target;
mod target;

pub use svg_target::SvgTarget;
pub use target::{RecordingTarget, RenderTarget};
