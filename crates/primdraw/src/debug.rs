//! Debugger introspection: the painter's style exposed as named string
//! properties that a debugger can display and edit.

use crate::error::PropertyError;
use crate::paint::{parse_float_lenient, parse_int_lenient, Rgb};
use crate::painter::ShapePainter;

/// Inspectable painter properties, in debugger display order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DebugProperty {
    FillColor,
    FillOpacity,
    OutlineSize,
    OutlineColor,
    OutlineOpacity,
}

impl DebugProperty {
    pub const ALL: [DebugProperty; 5] = [
        DebugProperty::FillColor,
        DebugProperty::FillOpacity,
        DebugProperty::OutlineSize,
        DebugProperty::OutlineColor,
        DebugProperty::OutlineOpacity,
    ];

    /// Maps a debugger row index to a property.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            DebugProperty::FillColor => "Fill color",
            DebugProperty::FillOpacity => "Fill opacity",
            DebugProperty::OutlineSize => "Outline size",
            DebugProperty::OutlineColor => "Outline color",
            DebugProperty::OutlineOpacity => "Outline opacity",
        }
    }
}

impl ShapePainter {
    #[inline]
    pub fn property_count(&self) -> usize {
        DebugProperty::ALL.len()
    }

    /// Returns `(name, value)` for display. Colors render as `"r;g;b"`.
    pub fn debugger_property(&self, prop: DebugProperty) -> (&'static str, String) {
        let style = self.style();
        let value = match prop {
            DebugProperty::FillColor => style.fill_color().to_spec(),
            DebugProperty::FillOpacity => style.fill_opacity().to_string(),
            DebugProperty::OutlineSize => style.outline_size().to_string(),
            DebugProperty::OutlineColor => style.outline_color().to_spec(),
            DebugProperty::OutlineOpacity => style.outline_opacity().to_string(),
        };
        (prop.name(), value)
    }

    /// Applies a debugger edit.
    ///
    /// Colors need at least three `;`-separated values; anything shorter is
    /// rejected and leaves the style untouched. Numbers are read leniently
    /// (unreadable input becomes `0`) and opacities are clamped as usual.
    pub fn change_property(&mut self, prop: DebugProperty, value: &str) -> Result<(), PropertyError> {
        match prop {
            DebugProperty::FillColor => {
                let rgb = parse_color(value)?;
                self.set_fill_color(rgb.r, rgb.g, rgb.b);
            }
            DebugProperty::FillOpacity => self.set_fill_opacity(parse_float_lenient(value)),
            DebugProperty::OutlineSize => self.set_outline_size(parse_int_lenient(value)),
            DebugProperty::OutlineColor => {
                let rgb = parse_color(value)?;
                self.set_outline_color(rgb.r, rgb.g, rgb.b);
            }
            DebugProperty::OutlineOpacity => self.set_outline_opacity(parse_float_lenient(value)),
        }
        log::debug!("{}: debugger set {} = {:?}", self.name(), prop.name(), value);
        Ok(())
    }
}

fn parse_color(value: &str) -> Result<Rgb, PropertyError> {
    Rgb::parse_spec(value).ok_or_else(|| PropertyError::InvalidColor(value.to_owned()))
}
