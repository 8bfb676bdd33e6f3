//! Snippet colour analysis: hex literal extraction and WCAG relative luminance.
//! See: <https://www.w3.org/TR/css-color-4/#hex-notation>
//! See: <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>

#![forbid(unsafe_code)]

mod literal;
mod wcag;

pub use literal::{extract_hex_colors, hex_to_rgb};
pub use wcag::relative_luminance;

use csscolorparser::Color;

/// An opaque `sRGB` colour with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// 8-bit RGBA channels of a parsed CSS colour.
pub type Rgba8Tuple = (u8, u8, u8, u8);

/// Parse a CSS <color> into 8-bit RGBA channels.
///
/// Supports named colors, hex forms (`#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa`),
/// and functional notations like `rgb()/rgba()`. This is the general parser; brightness
/// classification goes through the stricter [`hex_to_rgb`].
///
/// See: <https://www.w3.org/TR/css-color-4/#typedef-color>
#[inline]
pub fn parse_css_color(input: &str) -> Option<Rgba8Tuple> {
    let parsed: Color = input.parse().ok()?;
    let [red, green, blue, alpha] = parsed.to_rgba8();
    Some((red, green, blue, alpha))
}
