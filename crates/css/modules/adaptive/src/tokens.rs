//! Adaptive utility-class tokens per brightness.

use crate::Brightness;
use serde::Serialize;

/// The four presentation tokens the site chrome uses over a classified backdrop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AdaptiveClassSet {
    /// Emphasised text.
    pub text: &'static str,
    /// Secondary text.
    pub muted: &'static str,
    /// Interactive surfaces (buttons, nav pills), including hover state.
    pub background: &'static str,
    /// Card and panel surfaces.
    pub card: &'static str,
}

const DARK: AdaptiveClassSet = AdaptiveClassSet {
    text: "text-white",
    muted: "text-white/70",
    background: "bg-white/10 hover:bg-white/20",
    card: "bg-black/20 backdrop-blur-sm",
};

const LIGHT: AdaptiveClassSet = AdaptiveClassSet {
    text: "text-gray-900",
    muted: "text-gray-600",
    background: "bg-black/5 hover:bg-black/10",
    card: "bg-white/80 backdrop-blur-sm",
};

const AUTO: AdaptiveClassSet = AdaptiveClassSet {
    text: "text-foreground",
    muted: "text-muted-foreground",
    background: "bg-secondary",
    card: "bg-card",
};

/// Adaptive classes for a backdrop of the given brightness.
pub const fn resolve(brightness: Brightness) -> AdaptiveClassSet {
    match brightness {
        Brightness::Dark => DARK,
        Brightness::Light => LIGHT,
        Brightness::Auto => AUTO,
    }
}
