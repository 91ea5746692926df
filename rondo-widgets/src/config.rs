//! # Button Configuration
//!
//! Declarative configuration for [`RoundButton`](crate::button::RoundButton),
//! loadable from TOML. This is the equivalent of the host toolkit's
//! attribute mechanism: a fixed set of named options resolved once at
//! construction time.
//!
//! ## Configuration File Format
//!
//! ```toml
//! pressed_ratio = 0.8
//! corner_radius = -1          # -1 selects the stadium shape
//! stroke_color = "#336699"
//! stroke_width = 2
//! stroke_dash_width = 6
//! stroke_dash_gap = 4
//!
//! # either a single color...
//! solid_color = "#336699"
//! # ...or explicit per-state colors:
//! # [solid_color]
//! # default = "#336699"
//! # pressed = "#29527a"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use rondo_style::color::parse_hex_color;
use rondo_style::corner::CornerPolicy;
use rondo_style::error::StyleError;
use rondo_style::state::InteractionState;
use rondo_style::table::ColorTable;

use crate::background::StrokeStyle;
use crate::error::{WidgetError, WidgetResult};

/// The default ratio applied to the HSV value channel for pressed colors.
pub const DEFAULT_PRESSED_RATIO: f32 = 0.8;

/// A color table in configuration form: either a single hex color for
/// every state, or explicit per-state entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorTableSpec {
    /// One color for every state.
    Hex(String),
    /// Explicit per-state colors.
    Table {
        /// The fallback color.
        default: String,
        /// The color while pressed.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pressed: Option<String>,
    },
}

impl ColorTableSpec {
    /// Build the runtime color table described by this spec.
    pub fn to_table(&self) -> Result<ColorTable, StyleError> {
        match self {
            Self::Hex(hex) => Ok(ColorTable::solid(parse_hex_color(hex)?)),
            Self::Table { default, pressed } => {
                let mut table = ColorTable::solid(parse_hex_color(default)?);
                if let Some(pressed) = pressed {
                    table.set_state(InteractionState::Pressed, parse_hex_color(pressed)?);
                }
                Ok(table)
            }
        }
    }
}

/// Construction-time options for a round button.
///
/// All fields have defaults, so an empty document is a valid
/// configuration: a transparent, square-cornered, strokeless button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundButtonConfig {
    /// Scale applied to the HSV value channel to derive pressed colors
    /// when the fill has no explicit pressed entry.
    pub pressed_ratio: f32,
    /// Corner radius in logical pixels; `-1` selects the stadium shape.
    pub corner_radius: i32,
    /// Outline color. Defaults to transparent when a width is set
    /// without a color.
    #[serde(with = "rondo_style::serde_color::opt", skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
    /// Outline width in logical pixels; `0` disables the outline.
    pub stroke_width: u32,
    /// Dash length for the outline; `0` draws a solid line.
    pub stroke_dash_width: u32,
    /// Gap between outline dashes.
    pub stroke_dash_gap: u32,
    /// Fill color or per-state fill colors. Absent means transparent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solid_color: Option<ColorTableSpec>,
}

impl Default for RoundButtonConfig {
    fn default() -> Self {
        Self {
            pressed_ratio: DEFAULT_PRESSED_RATIO,
            corner_radius: 0,
            stroke_color: None,
            stroke_width: 0,
            stroke_dash_width: 0,
            stroke_dash_gap: 0,
            solid_color: None,
        }
    }
}

impl RoundButtonConfig {
    /// Parse a configuration from TOML content.
    ///
    /// ```rust
    /// use rondo_widgets::config::RoundButtonConfig;
    ///
    /// let config = RoundButtonConfig::from_toml(
    ///     r##"
    ///     pressed_ratio = 0.65
    ///     corner_radius = -1
    ///     solid_color = "#336699"
    ///     "##,
    /// )
    /// .unwrap();
    /// assert!(config.corner_policy().is_stadium());
    /// ```
    pub fn from_toml(content: &str) -> WidgetResult<Self> {
        toml::from_str(content).map_err(|err| WidgetError::config_parse(err.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> WidgetResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        if path.extension().and_then(|ext| ext.to_str()) == Some("toml") {
            toml::from_str(&content)
                .map_err(|err| WidgetError::config_file_parse(path, err.to_string()))
        } else {
            Err(WidgetError::config_file_parse(
                path,
                "unsupported configuration file format, use .toml",
            ))
        }
    }

    /// The corner policy selected by [`corner_radius`](Self::corner_radius).
    pub fn corner_policy(&self) -> CornerPolicy {
        CornerPolicy::from_px(self.corner_radius)
    }

    /// The outline described by the stroke fields, or `None` when the
    /// width is zero.
    pub fn stroke_style(&self) -> Option<StrokeStyle> {
        if self.stroke_width == 0 {
            return None;
        }
        let color = self.stroke_color.unwrap_or(Color::TRANSPARENT);
        Some(
            StrokeStyle::new(color, self.stroke_width as f32)
                .with_dashes(self.stroke_dash_width as f32, self.stroke_dash_gap as f32),
        )
    }

    /// The fill table described by [`solid_color`](Self::solid_color).
    /// Absent configuration yields a fully transparent table.
    pub fn fill_table(&self) -> WidgetResult<ColorTable> {
        match &self.solid_color {
            Some(spec) => Ok(spec.to_table()?),
            None => Ok(ColorTable::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_the_defaults() {
        let config = RoundButtonConfig::from_toml("").unwrap();
        assert_eq!(config, RoundButtonConfig::default());
        assert_eq!(config.pressed_ratio, 0.8);
        assert_eq!(config.corner_policy(), CornerPolicy::Fixed(0.0));
        assert!(config.stroke_style().is_none());
        assert!(!config.fill_table().unwrap().is_stateful());
    }

    #[test]
    fn parses_a_full_configuration() {
        let config = RoundButtonConfig::from_toml(
            r##"
            pressed_ratio = 0.65
            corner_radius = -1
            stroke_color = "#336699"
            stroke_width = 2
            stroke_dash_width = 6
            stroke_dash_gap = 4
            solid_color = "#c8143c"
            "##,
        )
        .unwrap();

        assert_eq!(config.pressed_ratio, 0.65);
        assert!(config.corner_policy().is_stadium());

        let stroke = config.stroke_style().unwrap();
        assert_eq!(stroke.color, Color::from_rgb8(0x33, 0x66, 0x99));
        assert_eq!(stroke.width, 2.0);
        assert_eq!((stroke.dash_width, stroke.dash_gap), (6.0, 4.0));

        let table = config.fill_table().unwrap();
        assert_eq!(table.default_color(), Color::from_rgb8(0xc8, 0x14, 0x3c));
    }

    #[test]
    fn solid_color_accepts_per_state_tables() {
        let config = RoundButtonConfig::from_toml(
            r##"
            [solid_color]
            default = "#336699"
            pressed = "#29527a"
            "##,
        )
        .unwrap();

        let table = config.fill_table().unwrap();
        assert!(table.is_stateful());
        assert_eq!(
            table.resolve(InteractionState::Pressed),
            Color::from_rgb8(0x29, 0x52, 0x7a)
        );
    }

    #[test]
    fn stroke_width_of_zero_disables_the_outline() {
        let config = RoundButtonConfig::from_toml(r##"stroke_color = "#336699""##).unwrap();
        assert!(config.stroke_style().is_none());
    }

    #[test]
    fn stroke_width_without_color_falls_back_to_transparent() {
        let config = RoundButtonConfig::from_toml("stroke_width = 1").unwrap();
        let stroke = config.stroke_style().unwrap();
        assert_eq!(stroke.color, Color::TRANSPARENT);
    }

    #[test]
    fn invalid_hex_colors_surface_as_errors() {
        let config = RoundButtonConfig::from_toml(r##"solid_color = "#33669""##).unwrap();
        assert!(config.fill_table().is_err());

        assert!(RoundButtonConfig::from_toml(r##"stroke_color = "oops""##).is_err());
    }

    #[test]
    fn malformed_documents_surface_as_parse_errors() {
        let err = RoundButtonConfig::from_toml("corner_radius = \"round\"").unwrap_err();
        assert!(matches!(err, WidgetError::ConfigParse { .. }));
    }

    #[test]
    fn configurations_round_trip_through_toml() {
        let config = RoundButtonConfig {
            pressed_ratio: 0.65,
            corner_radius: -1,
            stroke_color: Some(Color::from_rgb8(0x33, 0x66, 0x99)),
            stroke_width: 2,
            stroke_dash_width: 6,
            stroke_dash_gap: 4,
            solid_color: Some(ColorTableSpec::Table {
                default: "#336699".into(),
                pressed: Some("#29527a".into()),
            }),
        };

        let serialized = toml::to_string(&config).unwrap();
        let parsed = RoundButtonConfig::from_toml(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
