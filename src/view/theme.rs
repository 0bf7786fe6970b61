//! Light/dark palettes for the terminal card

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::UrgencyLevel;

/// Card color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                heading: Color::Blue,
                label: Color::Magenta,
                body: Color::Black,
                muted: Color::BrightBlack,
                accent: Color::Cyan,
                urgency_low: Color::Green,
                urgency_medium: Color::Yellow,
                urgency_high: Color::Red,
            },
            Theme::Dark => Palette {
                heading: Color::BrightCyan,
                label: Color::BrightMagenta,
                body: Color::BrightWhite,
                muted: Color::White,
                accent: Color::BrightBlue,
                urgency_low: Color::BrightGreen,
                urgency_medium: Color::BrightYellow,
                urgency_high: Color::BrightRed,
            },
        }
    }

    /// Key into the string table
    pub fn label_key(&self) -> &'static str {
        match self {
            Theme::Light => "theme.light",
            Theme::Dark => "theme.dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Resolved colors for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub heading: Color,
    pub label: Color,
    pub body: Color,
    pub muted: Color,
    pub accent: Color,
    pub urgency_low: Color,
    pub urgency_medium: Color,
    pub urgency_high: Color,
}

impl Palette {
    pub fn urgency(&self, level: UrgencyLevel) -> Color {
        match level {
            UrgencyLevel::Low => self.urgency_low,
            UrgencyLevel::Medium => self.urgency_medium,
            UrgencyLevel::High => self.urgency_high,
            UrgencyLevel::Unknown => self.body,
        }
    }
}
