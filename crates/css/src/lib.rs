//! Snippet style engine facade.
//!
//! One CSS blob feeds two independent branches: the declaration parser produces the inline
//! style for the live preview, and the colour branch produces a brightness estimate that
//! selects the adaptive chrome classes. [`SnippetStyle::analyze`] runs both.

#![forbid(unsafe_code)]

use log::debug;
use serde::Serialize;

pub use css_adaptive::{
    AdaptiveClassSet, Brightness, BrightnessClassifier, classify, resolve, weighted_luminance,
};
pub use css_color::{Rgb, extract_hex_colors, hex_to_rgb, relative_luminance};
pub use css_style_attr::{
    Declaration, StyleMap, camel_to_kebab, kebab_to_camel, parse, parse_declarations,
};

/// Everything the preview layer derives from one snippet's CSS.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SnippetStyle {
    /// Inline style for the live preview.
    pub style: StyleMap,
    pub brightness: Brightness,
    /// Chrome classes for this brightness.
    pub classes: AdaptiveClassSet,
}

impl SnippetStyle {
    /// Analyze with the default classifier.
    pub fn analyze(css_text: &str) -> Self {
        Self::analyze_with(css_text, &BrightnessClassifier::default())
    }

    /// Analyze with a caller-tuned classifier.
    pub fn analyze_with(css_text: &str, classifier: &BrightnessClassifier) -> Self {
        let style = parse(css_text);
        let brightness = classifier.classify(css_text);
        debug!(
            "css: analyzed snippet into {} properties, brightness {brightness}",
            style.len()
        );
        Self {
            style,
            brightness,
            classes: resolve(brightness),
        }
    }
}

/// Render a style map back into `style` attribute text.
///
/// Keys return to kebab-case; pairs keep map order and are separated by single spaces.
pub fn to_inline_style(style: &StyleMap) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{}: {value};", camel_to_kebab(key)))
        .collect::<Vec<_>>()
        .join(" ")
}
