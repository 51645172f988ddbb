use serde::{Deserialize, Serialize};

/// Straight-alpha color snapshot carried by draw commands.
///
/// Channels live on the 0–255 scale but are stored unclamped: scripted
/// setters pass raw integers through, and render targets decide how to map
/// them (see [`Color::to_rgba8`]). Alpha is an opacity on the same scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255.0);
    pub const BLACK: Color = Color::new(0, 0, 0, 255.0);

    #[inline]
    pub const fn new(r: i32, g: i32, b: i32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn from_rgb(rgb: Rgb, a: f32) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Converts to 8-bit RGBA.
    ///
    /// Color channels keep their low 8 bits (so `256` wraps to `0` and `-1`
    /// to `255`). Alpha is clamped to `[0, 255]` and truncated.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            self.r as u8,
            self.g as u8,
            self.b as u8,
            if self.a.is_nan() { 0 } else { self.a.clamp(0.0, 255.0) as u8 },
        ]
    }

    /// Alpha as a `[0, 1]` fraction, for targets that want normalized opacity.
    #[inline]
    pub fn alpha_unit(self) -> f32 {
        f32::from(self.to_rgba8()[3]) / 255.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Three raw integer color channels.
///
/// Persisted as `{"r": .., "g": .., "b": ..}`; missing channels read as `0`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Parses a `"r;g;b"` color spec.
    ///
    /// Returns `None` when fewer than three `;`-separated tokens are present.
    /// Extra tokens are ignored. Each token is read with [`parse_int_lenient`],
    /// so garbage tokens yield `0` rather than failing.
    pub fn parse_spec(spec: &str) -> Option<Rgb> {
        let mut tokens = spec.split(';');
        let r = tokens.next()?;
        let g = tokens.next()?;
        let b = tokens.next()?;
        Some(Rgb::new(
            parse_int_lenient(r),
            parse_int_lenient(g),
            parse_int_lenient(b),
        ))
    }

    /// Formats as `"r;g;b"`, the inverse of [`Rgb::parse_spec`].
    pub fn to_spec(self) -> String {
        format!("{};{};{}", self.r, self.g, self.b)
    }
}

/// Reads an integer the way scripted string conversions do: surrounding
/// whitespace is ignored, an optional sign and the leading run of digits are
/// consumed, and anything unreadable (or out of `i32` range) yields `0`.
pub fn parse_int_lenient(s: &str) -> i32 {
    let s = s.trim();
    let digits_end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '+' || c == '-'))))
        .map_or(s.len(), |(i, _)| i);
    s[..digits_end].parse().unwrap_or(0)
}

/// Float counterpart of [`parse_int_lenient`]: unreadable input yields `0.0`.
pub fn parse_float_lenient(s: &str) -> f32 {
    s.trim().parse().unwrap_or(0.0)
}
