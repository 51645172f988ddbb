//! Per-object style state.
//!
//! Holds the fill/outline appearance and coordinate mode that every issued draw
//! command snapshots. Opacity writers clamp to `[0, 255]`; color channel writers
//! deliberately do not validate, leaving out-of-range channels to the render
//! target.

use crate::paint::{Color, Rgb};
use crate::scene::Outline;

/// Upper bound for fill/outline opacity.
pub const MAX_OPACITY: f32 = 255.0;

/// How draw-call coordinates are interpreted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum CoordinateMode {
    /// Coordinates are offsets from the owning object's position.
    #[default]
    Relative,
    /// Coordinates are world coordinates, used as given.
    Absolute,
}

impl CoordinateMode {
    #[inline]
    pub const fn from_absolute(absolute: bool) -> Self {
        if absolute { Self::Absolute } else { Self::Relative }
    }

    #[inline]
    pub const fn is_absolute(self) -> bool {
        matches!(self, Self::Absolute)
    }
}

/// Fill/outline appearance of a shape painter.
///
/// Invariant: `fill_opacity` and `outline_opacity` stay within `[0, 255]`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    fill_color: Rgb,
    fill_opacity: f32,
    outline_color: Rgb,
    outline_size: i32,
    outline_opacity: f32,
    coordinate_mode: CoordinateMode,
}

impl Default for StyleState {
    /// White opaque fill, black opaque outline of size 1, relative coordinates.
    fn default() -> Self {
        Self {
            fill_color: Rgb::WHITE,
            fill_opacity: MAX_OPACITY,
            outline_color: Rgb::BLACK,
            outline_size: 1,
            outline_opacity: MAX_OPACITY,
            coordinate_mode: CoordinateMode::Relative,
        }
    }
}

impl StyleState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn fill_color(&self) -> Rgb {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, r: i32, g: i32, b: i32) {
        self.fill_color = Rgb::new(r, g, b);
    }

    /// Sets the fill color from a `"r;g;b"` spec. Specs with fewer than three
    /// tokens are ignored.
    pub fn set_fill_color_str(&mut self, spec: &str) {
        if let Some(rgb) = Rgb::parse_spec(spec) {
            self.fill_color = rgb;
        }
    }

    #[inline]
    pub fn fill_opacity(&self) -> f32 {
        self.fill_opacity
    }

    pub fn set_fill_opacity(&mut self, opacity: f32) {
        self.fill_opacity = clamp_opacity(opacity);
    }

    /// Fill color snapshot for a draw command.
    #[inline]
    pub fn fill(&self) -> Color {
        Color::from_rgb(self.fill_color, self.fill_opacity)
    }

    // ── outline ───────────────────────────────────────────────────────────

    #[inline]
    pub fn outline_color(&self) -> Rgb {
        self.outline_color
    }

    pub fn set_outline_color(&mut self, r: i32, g: i32, b: i32) {
        self.outline_color = Rgb::new(r, g, b);
    }

    /// Sets the outline color from a `"r;g;b"` spec. Specs with fewer than
    /// three tokens are ignored.
    pub fn set_outline_color_str(&mut self, spec: &str) {
        if let Some(rgb) = Rgb::parse_spec(spec) {
            self.outline_color = rgb;
        }
    }

    #[inline]
    pub fn outline_opacity(&self) -> f32 {
        self.outline_opacity
    }

    pub fn set_outline_opacity(&mut self, opacity: f32) {
        self.outline_opacity = clamp_opacity(opacity);
    }

    #[inline]
    pub fn outline_size(&self) -> i32 {
        self.outline_size
    }

    /// Outline thickness. Not validated; negative sizes reach the renderer.
    pub fn set_outline_size(&mut self, size: i32) {
        self.outline_size = size;
    }

    /// Outline snapshot for a draw command.
    #[inline]
    pub fn outline(&self) -> Outline {
        Outline::new(
            self.outline_size as f32,
            Color::from_rgb(self.outline_color, self.outline_opacity),
        )
    }

    // ── coordinates ───────────────────────────────────────────────────────

    #[inline]
    pub fn coordinate_mode(&self) -> CoordinateMode {
        self.coordinate_mode
    }

    pub fn set_coordinate_mode(&mut self, mode: CoordinateMode) {
        self.coordinate_mode = mode;
    }

    #[inline]
    pub fn are_coordinates_absolute(&self) -> bool {
        self.coordinate_mode.is_absolute()
    }

    pub fn set_coordinates_absolute(&mut self, absolute: bool) {
        self.coordinate_mode = CoordinateMode::from_absolute(absolute);
    }
}

// NaN compares false against both bounds, so it is mapped to 0 explicitly.
#[inline]
fn clamp_opacity(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, MAX_OPACITY) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = StyleState::default();
        assert_eq!(s.fill_color(), Rgb::new(255, 255, 255));
        assert_eq!(s.fill_opacity(), 255.0);
        assert_eq!(s.outline_color(), Rgb::new(0, 0, 0));
        assert_eq!(s.outline_size(), 1);
        assert_eq!(s.outline_opacity(), 255.0);
        assert_eq!(s.coordinate_mode(), CoordinateMode::Relative);
        assert!(!s.are_coordinates_absolute());
    }

    // ── opacity clamping ──────────────────────────────────────────────────

    #[test]
    fn fill_opacity_clamps_both_ends() {
        let mut s = StyleState::new();
        for (input, stored) in [(300.0, 255.0), (-20.0, 0.0), (255.5, 255.0), (f32::INFINITY, 255.0)] {
            s.set_fill_opacity(input);
            assert_eq!(s.fill_opacity(), stored, "input {input}");
        }
    }

    #[test]
    fn outline_opacity_clamps_both_ends() {
        let mut s = StyleState::new();
        s.set_outline_opacity(1000.0);
        assert_eq!(s.outline_opacity(), 255.0);
        s.set_outline_opacity(f32::NEG_INFINITY);
        assert_eq!(s.outline_opacity(), 0.0);
    }

    #[test]
    fn opacity_in_range_is_kept_exactly() {
        let mut s = StyleState::new();
        s.set_fill_opacity(127.25);
        s.set_outline_opacity(0.5);
        assert_eq!(s.fill_opacity(), 127.25);
        assert_eq!(s.outline_opacity(), 0.5);
    }

    #[test]
    fn nan_opacity_stays_in_range() {
        let mut s = StyleState::new();
        s.set_fill_opacity(f32::NAN);
        assert_eq!(s.fill_opacity(), 0.0);
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn color_setters_do_not_clamp() {
        let mut s = StyleState::new();
        s.set_fill_color(300, -4, 70000);
        s.set_outline_color(-1, 256, 0);
        assert_eq!(s.fill_color(), Rgb::new(300, -4, 70000));
        assert_eq!(s.outline_color(), Rgb::new(-1, 256, 0));
    }

    #[test]
    fn color_str_sets_channels_in_order() {
        let mut s = StyleState::new();
        s.set_fill_color_str("1;2;3");
        s.set_outline_color_str("4;5;6");
        assert_eq!(s.fill_color(), Rgb::new(1, 2, 3));
        assert_eq!(s.outline_color(), Rgb::new(4, 5, 6));
    }

    #[test]
    fn color_str_with_too_few_tokens_is_ignored() {
        let mut s = StyleState::new();
        s.set_fill_color(9, 8, 7);
        s.set_fill_color_str("1;2");
        s.set_outline_color_str("");
        assert_eq!(s.fill_color(), Rgb::new(9, 8, 7));
        assert_eq!(s.outline_color(), Rgb::BLACK);
    }

    // ── snapshots ─────────────────────────────────────────────────────────

    #[test]
    fn fill_and_outline_snapshots() {
        let mut s = StyleState::new();
        s.set_fill_color(10, 20, 30);
        s.set_fill_opacity(100.0);
        s.set_outline_color(1, 2, 3);
        s.set_outline_opacity(50.0);
        s.set_outline_size(4);

        assert_eq!(s.fill(), Color::new(10, 20, 30, 100.0));
        assert_eq!(s.outline(), Outline::new(4.0, Color::new(1, 2, 3, 50.0)));
    }

    #[test]
    fn coordinate_mode_bool_and_enum_agree() {
        let mut s = StyleState::new();
        s.set_coordinates_absolute(true);
        assert_eq!(s.coordinate_mode(), CoordinateMode::Absolute);
        s.set_coordinate_mode(CoordinateMode::Relative);
        assert!(!s.are_coordinates_absolute());
    }
}
