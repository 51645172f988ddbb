//! Design-time template: the persisted form of a painter's style.
//!
//! Layout (JSON):
//!
//! ```json
//! {
//!   "fillOpacity": 255,
//!   "outlineSize": 1,
//!   "outlineOpacity": 255,
//!   "fillColor": { "r": 255, "g": 255, "b": 255 },
//!   "outlineColor": { "r": 0, "g": 0, "b": 0 },
//!   "absoluteCoordinates": false
//! }
//! ```
//!
//! Every key is optional and falls back to the [`StyleState`] default. Older
//! project files spell the keys with a leading capital (`FillOpacity`, ...);
//! those are accepted on load and never written.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TemplateError;
use crate::paint::Rgb;
use crate::style::StyleState;

/// Serialized style fields of a shape painter object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapePainterTemplate {
    #[serde(alias = "FillOpacity", deserialize_with = "int_from_number")]
    pub fill_opacity: i32,
    #[serde(alias = "OutlineSize", deserialize_with = "int_from_number")]
    pub outline_size: i32,
    #[serde(alias = "OutlineOpacity", deserialize_with = "int_from_number")]
    pub outline_opacity: i32,
    #[serde(alias = "FillColor")]
    pub fill_color: Rgb,
    #[serde(alias = "OutlineColor")]
    pub outline_color: Rgb,
    #[serde(alias = "AbsoluteCoordinates")]
    pub absolute_coordinates: bool,
}

impl Default for ShapePainterTemplate {
    fn default() -> Self {
        Self::from(&StyleState::default())
    }
}

impl From<&StyleState> for ShapePainterTemplate {
    /// Opacities are stored as integers and truncate toward zero.
    fn from(style: &StyleState) -> Self {
        Self {
            fill_opacity: style.fill_opacity() as i32,
            outline_size: style.outline_size(),
            outline_opacity: style.outline_opacity() as i32,
            fill_color: style.fill_color(),
            outline_color: style.outline_color(),
            absolute_coordinates: style.are_coordinates_absolute(),
        }
    }
}

impl ShapePainterTemplate {
    /// Builds the runtime style. Values go through the regular setters, so
    /// out-of-range opacities in a file are clamped on load.
    pub fn style(&self) -> StyleState {
        let mut style = StyleState::new();
        style.set_fill_color(self.fill_color.r, self.fill_color.g, self.fill_color.b);
        style.set_fill_opacity(self.fill_opacity as f32);
        style.set_outline_color(self.outline_color.r, self.outline_color.g, self.outline_color.b);
        style.set_outline_opacity(self.outline_opacity as f32);
        style.set_outline_size(self.outline_size);
        style.set_coordinates_absolute(self.absolute_coordinates);
        style
    }

    pub fn from_json_str(json: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let template = Self::from_json_str(&json)?;
        log::debug!("loaded shape painter template from {}", path.display());
        Ok(template)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TemplateError> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved shape painter template to {}", path.display());
        Ok(())
    }
}

// Project files written by other tools sometimes store these as floats.
fn int_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = f64::deserialize(deserializer)?;
    Ok(v as i32)
}
