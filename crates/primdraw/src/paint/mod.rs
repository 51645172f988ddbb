//! Paint model shared by style state, draw commands and render targets.
//!
//! Colors are kept on the 0–255 scale with unclamped integer channels; the
//! mapping to device colors is owned by each render target.

pub mod color;

pub use color::{parse_float_lenient, parse_int_lenient, Color, Rgb};
