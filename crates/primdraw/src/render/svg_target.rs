use std::path::Path;

use svg::Document;
use svg::Node;
use svg::node::element::{Circle, Rectangle};

use crate::coords::Vec2;
use crate::error::RenderError;
use crate::paint::Color;
use crate::scene::{CircleShape, Outline, RectShape};

use super::RenderTarget;

/// Renders shapes into an SVG document.
///
/// Mapping:
/// - rectangles become `<rect>` elements positioned by a
///   `translate(position) rotate(rotation) translate(-origin)` transform
/// - circles become `<circle>` elements at their scene-space center
/// - colors go through [`Color::to_rgba8`]; alpha becomes `*-opacity`
/// - outlines with thickness `<= 0` produce no stroke
///
/// SVG strokes straddle the shape edge, whereas painter outlines are meant to
/// sit outside it; the difference is accepted for this target.
#[derive(Debug, Clone)]
pub struct SvgTarget {
    document: Document,
    size: Vec2,
    elements: usize,
}

impl SvgTarget {
    /// Creates an empty document with a `0 0 width height` view box.
    pub fn new(width: f32, height: f32) -> Self {
        let document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {width} {height}"));
        Self { document, size: Vec2::new(width, height), elements: 0 }
    }

    /// Paints the whole view box with `color` before any shape.
    pub fn with_background(mut self, color: Color) -> Self {
        let bg = Rectangle::new()
            .set("width", self.size.x)
            .set("height", self.size.y);
        self.document.append(fill_attrs(bg, color));
        self
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Number of shape elements drawn so far (the background is not counted).
    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements
    }

    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn finish(self) -> Document {
        self.document
    }

    /// Writes the document to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        svg::save(path, &self.document).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("svg: wrote {} shapes to {}", self.elements, path.display());
        Ok(())
    }
}

impl RenderTarget for SvgTarget {
    fn draw_rect(&mut self, shape: &RectShape) {
        // SVG rejects negative extents; flip them into the local box instead.
        let (x, width) = span(shape.size.x);
        let (y, height) = span(shape.size.y);

        let transform = format!(
            "translate({} {}) rotate({}) translate({} {})",
            shape.position.x, shape.position.y, shape.rotation, -shape.origin.x, -shape.origin.y,
        );

        let rect = Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", width)
            .set("height", height)
            .set("transform", transform);

        self.document.append(stroke_attrs(fill_attrs(rect, shape.fill), shape.outline));
        self.elements += 1;
    }

    fn draw_circle(&mut self, shape: &CircleShape) {
        if shape.radius <= 0.0 {
            log::trace!("svg: skipping circle with radius {}", shape.radius);
            return;
        }

        let center = shape.center();
        let circle = Circle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", shape.radius);

        self.document.append(stroke_attrs(fill_attrs(circle, shape.fill), shape.outline));
        self.elements += 1;
    }
}

#[inline]
fn span(extent: f32) -> (f32, f32) {
    if extent < 0.0 { (extent, -extent) } else { (0.0, extent) }
}

fn rgb_value(color: Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format!("rgb({r},{g},{b})")
}

fn fill_attrs<N: Node>(mut node: N, color: Color) -> N {
    node.assign("fill", rgb_value(color));
    node.assign("fill-opacity", color.alpha_unit());
    node
}

fn stroke_attrs<N: Node>(mut node: N, outline: Outline) -> N {
    if outline.thickness > 0.0 {
        node.assign("stroke", rgb_value(outline.color));
        node.assign("stroke-width", outline.thickness);
        node.assign("stroke-opacity", outline.color.alpha_unit());
    }
    node
}
