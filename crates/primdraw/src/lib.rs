//! primdraw: a shape painter game object.
//!
//! Scripted game logic issues rectangles, lines and circles during a frame;
//! the painter snapshots its current fill/outline style into each command,
//! resolves coordinates against the object's position, and replays the queue
//! into a [`RenderTarget`](render::RenderTarget) once per frame before
//! clearing it.
//!
//! # Quick start
//!
//! ```
//! use primdraw::painter::ShapePainter;
//! use primdraw::render::RecordingTarget;
//!
//! let mut painter = ShapePainter::new("hud");
//! painter.set_position(100.0, 100.0);
//! painter.set_fill_color(10, 20, 30);
//! painter.draw_rectangle(0.0, 0.0, 5.0, 5.0);
//! painter.draw_circle(20.0, 0.0, 4.0);
//!
//! let mut target = RecordingTarget::new();
//! assert!(painter.draw(&mut target));
//! assert_eq!(target.drawn().len(), 2);
//! assert!(painter.pending().is_empty());
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2` |
//! | [`paint`] | `Color`, `Rgb`, lenient number parsing |
//! | [`style`] | `StyleState`, `CoordinateMode` |
//! | [`scene`] | `DrawCmd`, `RectShape`, `CircleShape`, `Outline`, `DrawList` |
//! | [`render`] | `RenderTarget`, `RecordingTarget`, `SvgTarget` |
//! | [`painter`] | `ShapePainter` |
//! | [`template`] | `ShapePainterTemplate` (JSON persistence) |
//! | [`debug`] | `DebugProperty` and debugger accessors |
//! | [`error`] | error types |
//! | [`logging`] | `init_logging` |

pub mod coords;
pub mod debug;
pub mod error;
pub mod logging;
pub mod paint;
pub mod painter;
pub mod render;
pub mod scene;
pub mod style;
pub mod template;

pub use painter::ShapePainter;
pub use template::ShapePainterTemplate;
