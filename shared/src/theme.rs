//! # Theme Configuration
//!
//! Two display themes, each mapping to a pair of RGB colors. The frontend
//! writes the pair into the `--color-dark` and `--color-light` CSS custom
//! properties, and the stylesheet derives everything else from those.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const CSS_VAR_DARK: &str = "--color-dark";
pub const CSS_VAR_LIGHT: &str = "--color-light";

/// An RGB triple, rendered the way the stylesheet expects: `"r, g, b"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

const INK: Rgb = Rgb(10, 10, 20);
const PAPER: Rgb = Rgb(255, 255, 255);

/// Color pair applied for a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub dark: Rgb,
    pub light: Rgb,
}

impl ThemeColors {
    /// CSS custom property assignments for this pair
    pub fn css_properties(&self) -> [(&'static str, String); 2] {
        [
            (CSS_VAR_DARK, self.dark.to_string()),
            (CSS_VAR_LIGHT, self.light.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Day, Theme::Night];

    /// Startup theme from the system "prefers dark" signal
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Night
        } else {
            Theme::Day
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Day => ThemeColors {
                dark: INK,
                light: PAPER,
            },
            // Night swaps the pair
            Theme::Night => ThemeColors {
                dark: PAPER,
                light: INK,
            },
        }
    }

    /// Value used by the settings form select
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Day => "Day",
            Theme::Night => "Night",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`, expected `day` or `night`")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}
