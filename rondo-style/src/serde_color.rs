//! Custom serialization helpers for vello::peniko::Color
//!
//! Serializes colors as `#rrggbb` hex strings, with the alpha channel
//! appended only when it is not fully opaque. Use with
//! `#[serde(with = "rondo_style::serde_color")]` on a `Color` field, or
//! the [`opt`] module for `Option<Color>` fields.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

use crate::color::{parse_hex_color, rgba8};

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

/// Helpers for `Option<Color>` fields. `None` is expected to be skipped
/// on the serialization side via `skip_serializing_if`.
pub mod opt {
    use super::*;

    /// Serialize an optional Color as a hex string.
    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(color) => super::serialize(color, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional Color from a hex string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        match Option::<String>::deserialize(deserializer)? {
            Some(hex) => parse_hex_color(&hex).map(Some).map_err(Error::custom),
            None => Ok(None),
        }
    }
}

fn to_hex(color: Color) -> String {
    let [r, g, b, a] = rgba8(color);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}
