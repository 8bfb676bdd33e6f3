//! Hex colour literal extraction and RGB normalisation.

use crate::{Rgb, parse_css_color};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// `#` followed by 3 to 8 hex digits, ending on a word boundary.
///
/// The digit class covers the `#rgba` short form too, which [`hex_to_rgb`] later rejects.
static HEX_COLOR: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").ok());

/// Extract every hex colour literal from a CSS blob, in textual order.
///
/// Literals are returned with their leading `#`. Duplicates are kept. Any literal of 3 to 8
/// digits is matched here, including 4, 5 and 7 digit forms that have no RGB reading;
/// those are discarded by [`hex_to_rgb`], not by extraction.
pub fn extract_hex_colors(css_text: &str) -> Vec<&str> {
    HEX_COLOR.as_ref().map_or_else(Vec::new, |pattern| {
        pattern
            .find_iter(css_text)
            .map(|found| found.as_str())
            .collect()
    })
}

/// Convert a hex literal (with or without `#`) to RGB.
///
/// - 3 digits expand by doubling (`#f0a` is `#ff00aa`).
/// - 8 digits drop their trailing alpha pair.
/// - 6 digits are used as-is.
///
/// Any other length, including the 4-digit `#rgba` short form, is invalid and yields `None`,
/// as does a literal whose digits do not decode.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let normalized: String = match digits.len() {
        3 => digits.chars().flat_map(|digit| [digit, digit]).collect(),
        6 => digits.to_owned(),
        8 => digits.get(..6)?.to_owned(),
        other => {
            debug!("color: {hex:?} has {other} digits, not an RGB literal");
            return None;
        }
    };
    if normalized.len() != 6 {
        return None;
    }
    let (red, green, blue, _alpha) = parse_css_color(&format!("#{normalized}"))?;
    Some(Rgb::new(red, green, blue))
}
