//! Scene (draw command) types.
//!
//! Responsibilities:
//! - renderer-agnostic shape descriptors with resolved style and position
//! - an insertion-ordered per-frame command queue
//! - shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::circle::CircleShape;
pub use shapes::rect::RectShape;
pub use shapes::Outline;
