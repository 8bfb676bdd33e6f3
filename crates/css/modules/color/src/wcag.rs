//! WCAG 2.x relative luminance.

use crate::Rgb;

/// Channel weights of the `sRGB` luminance sum.
const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Below this normalised value a channel is in the linear segment of the `sRGB` curve.
const LINEAR_SEGMENT_LIMIT: f64 = 0.039_28;

/// Linearise one 8-bit `sRGB` channel.
fn linear_channel(channel: u8) -> f64 {
    let srgb = f64::from(channel) / 255.0;
    if srgb <= LINEAR_SEGMENT_LIMIT {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an `sRGB` colour, from 0.0 (black) to 1.0 (white).
///
/// See: <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let red = linear_channel(rgb.red);
    let green = linear_channel(rgb.green);
    let blue = linear_channel(rgb.blue);
    BLUE_WEIGHT.mul_add(blue, GREEN_WEIGHT.mul_add(green, RED_WEIGHT * red))
}
