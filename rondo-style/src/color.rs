//! Color derivation helpers for state-aware styling.
//!
//! The pressed appearance of a widget is usually a darker variant of its
//! resting color. [`pressed_variant`] derives that variant in HSV space so
//! hue and saturation survive the darkening, and [`grayscale`] collapses a
//! color to its perceived luminance for neutral surfaces.

use vello::peniko::Color;

use crate::error::StyleError;

/// Neutral stand-in used when deriving a darker variant of a fully
/// transparent color. Scaling the brightness of pure transparency yields
/// an invisible result, so a dim translucent gray is substituted first.
const TRANSPARENT_STAND_IN: [u8; 4] = [0x80, 0x80, 0x80, 0x22];

/// A color in HSV space. Alpha is carried separately by the conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, `[0.0, 360.0)`.
    pub hue: f32,
    /// Saturation, `[0.0, 1.0]`.
    pub saturation: f32,
    /// Value (brightness), `[0.0, 1.0]`.
    pub value: f32,
}

/// Derive the pressed variant of `color` by scaling its HSV value channel
/// by `ratio`, keeping hue, saturation and alpha unchanged.
///
/// A fully transparent input (alpha of zero, whatever the other channels
/// say) is replaced by a translucent gray stand-in before the conversion,
/// so pressing a color-less surface still gives visible feedback. The
/// result then carries the stand-in's alpha, not the input's.
///
/// `ratio` is applied as given. Values above `1.0` brighten, negative
/// values produce a clamped black; callers that want a guard should check
/// before calling.
///
/// ```
/// use rondo_style::color::pressed_variant;
/// use vello::peniko::Color;
///
/// let pressed = pressed_variant(Color::from_rgb8(0x33, 0x66, 0x99), 0.8);
/// let _ = pressed;
/// ```
pub fn pressed_variant(color: Color, ratio: f32) -> Color {
    let color = if rgba8(color)[3] == 0 {
        let [r, g, b, a] = TRANSPARENT_STAND_IN;
        Color::from_rgba8(r, g, b, a)
    } else {
        color
    };
    let alpha = rgba8(color)[3];
    let mut hsv = to_hsv(color);
    hsv.value *= ratio;
    from_hsv(hsv, alpha)
}

/// Collapse `color` to an opaque gray of the same perceived luminance,
/// using Rec. 601 luma weights. The input alpha is ignored.
pub fn grayscale(color: Color) -> Color {
    let [r, g, b, _] = rgba8(color);
    let luma = (r as f32 * 0.299 + g as f32 * 0.587 + b as f32 * 0.114).round() as u8;
    Color::from_rgba8(luma, luma, luma, 0xff)
}

/// Convert a color to HSV, dropping its alpha.
pub fn to_hsv(color: Color) -> Hsv {
    let [r, g, b, _] = rgba8(color);
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        hue,
        saturation,
        value: max,
    }
}

/// Convert an HSV triple back to a color with the given alpha.
pub fn from_hsv(hsv: Hsv, alpha: u8) -> Color {
    let hue = hsv.hue.rem_euclid(360.0) / 60.0;
    let sector = hue.floor();
    let fraction = hue - sector;

    let value = hsv.value.clamp(0.0, 1.0);
    let saturation = hsv.saturation.clamp(0.0, 1.0);

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    let (r, g, b) = match sector as u32 % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Color::from_rgba8(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b), alpha)
}

/// Parse a color from a hex string like `#rrggbb` or `#rrggbbaa`. The
/// leading `#` is optional.
pub fn parse_hex_color(hex: &str) -> Result<Color, StyleError> {
    let digits = hex.trim_start_matches('#');
    if !digits.is_ascii() {
        return Err(StyleError::invalid_color(hex, "not a hex digit sequence"));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| StyleError::invalid_color(hex, "not a hex digit sequence"))
    };
    match digits.len() {
        6 => Ok(Color::from_rgb8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
        )),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(StyleError::invalid_color(
            hex,
            "expected 6 or 8 hex digits",
        )),
    }
}

/// Extract the 8-bit RGBA channels of a color.
pub(crate) fn rgba8(color: Color) -> [u8; 4] {
    let c = color.components;
    [
        unit_to_byte(c[0]),
        unit_to_byte(c[1]),
        unit_to_byte(c[2]),
        unit_to_byte(c[3]),
    ]
}

fn unit_to_byte(component: f32) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}
