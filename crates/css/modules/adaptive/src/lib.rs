//! Adaptive contrast for snippet backdrops.
//!
//! When a pattern snippet is previewed as the live page background, the site chrome on
//! top of it has to stay readable. [`classify`] estimates whether a CSS blob is dark or
//! light from its hex colours, and [`resolve`] maps that estimate to the utility classes
//! the chrome uses instead of its hardcoded theme classes.

#![forbid(unsafe_code)]

mod brightness;
mod classify;
mod tokens;

pub use brightness::{Brightness, ParseBrightnessError};
pub use classify::{
    BrightnessClassifier, DARK_THRESHOLD, PRIMARY_COLOR_WEIGHT, SECONDARY_COLOR_WEIGHT, classify,
    weighted_luminance,
};
pub use tokens::{AdaptiveClassSet, resolve};
