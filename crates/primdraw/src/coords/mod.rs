//! Coordinate types shared by the scene, the painter object and render targets.
//!
//! Canonical space:
//! - scene units (pixels for raster and SVG targets)
//! - origin top-left
//! - +X right, +Y down
//!
//! Angles are in degrees; with +Y down, positive rotation is clockwise on screen.

mod vec2;

pub use vec2::Vec2;
