//! Weighted-luminance brightness classification.

use crate::Brightness;
use css_color::{extract_hex_colors, hex_to_rgb, relative_luminance};
use log::debug;

/// Weighted luminance below this is `dark`.
///
/// Empirically calibrated below the 0.5 midpoint; override via [`BrightnessClassifier`].
pub const DARK_THRESHOLD: f64 = 0.4;

/// Weight of the first valid colour, which in snippet CSS is usually the background.
pub const PRIMARY_COLOR_WEIGHT: f64 = 3.0;

/// Weight of every later valid colour.
pub const SECONDARY_COLOR_WEIGHT: f64 = 1.0;

/// Brightness classifier parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrightnessClassifier {
    pub dark_threshold: f64,
    pub primary_weight: f64,
    pub secondary_weight: f64,
}

impl Default for BrightnessClassifier {
    fn default() -> Self {
        Self {
            dark_threshold: DARK_THRESHOLD,
            primary_weight: PRIMARY_COLOR_WEIGHT,
            secondary_weight: SECONDARY_COLOR_WEIGHT,
        }
    }
}

impl BrightnessClassifier {
    /// Weighted average luminance of the hex colours in `css_text`.
    ///
    /// Colours are visited in textual order. Literals that do not convert to RGB are left
    /// out entirely; the first one that does gets the primary weight. Returns `None` when
    /// no colour contributes any weight.
    pub fn weighted_luminance(&self, css_text: &str) -> Option<f64> {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        let mut valid_colors = 0_usize;
        for literal in extract_hex_colors(css_text) {
            let Some(rgb) = hex_to_rgb(literal) else {
                debug!("adaptive: ignoring unconvertible colour {literal}");
                continue;
            };
            let weight = if valid_colors == 0 {
                self.primary_weight
            } else {
                self.secondary_weight
            };
            weighted_sum = relative_luminance(rgb).mul_add(weight, weighted_sum);
            total_weight += weight;
            valid_colors += 1;
        }
        (total_weight > 0.0).then(|| weighted_sum / total_weight)
    }

    /// Classify `css_text` as dark, light, or auto when there is no colour signal.
    pub fn classify(&self, css_text: &str) -> Brightness {
        match self.weighted_luminance(css_text) {
            None => Brightness::Auto,
            Some(average) if average < self.dark_threshold => Brightness::Dark,
            Some(_) => Brightness::Light,
        }
    }
}

/// [`BrightnessClassifier::weighted_luminance`] with the default parameters.
pub fn weighted_luminance(css_text: &str) -> Option<f64> {
    BrightnessClassifier::default().weighted_luminance(css_text)
}

/// [`BrightnessClassifier::classify`] with the default parameters.
pub fn classify(css_text: &str) -> Brightness {
    BrightnessClassifier::default().classify(css_text)
}
