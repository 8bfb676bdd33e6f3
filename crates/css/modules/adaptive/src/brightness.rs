use core::error::Error;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Coarse tone of a CSS blob.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Dark,
    Light,
    /// No decidable colour signal: no hex colours, or none that convert to RGB.
    #[default]
    Auto,
}

impl Brightness {
    pub const ALL: [Self; 3] = [Self::Dark, Self::Light, Self::Auto];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `dark`, `light`, `auto`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseBrightnessError {
    input: String,
}

impl fmt::Display for ParseBrightnessError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unknown brightness '{}', expected dark, light or auto",
            self.input
        )
    }
}

impl Error for ParseBrightnessError {}

impl FromStr for Brightness {
    type Err = ParseBrightnessError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|brightness| brightness.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ParseBrightnessError {
                input: input.to_owned(),
            })
    }
}
