//! Viewer-scoped outline colors.
//!
//! The palette mirrors the sixteen team colors the highlight capability can
//! render. `None` is a valid configuration value meaning "no explicit color";
//! the session then falls back to the classification default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Color applied to a viewer-scoped outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HighlightColor {
    #[default]
    None,
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

/// Canonical config-file spellings, shared by serde and `FromStr`.
const NAMES: &[(&str, HighlightColor)] = &[
    ("NONE", HighlightColor::None),
    ("BLACK", HighlightColor::Black),
    ("DARK_BLUE", HighlightColor::DarkBlue),
    ("DARK_GREEN", HighlightColor::DarkGreen),
    ("DARK_AQUA", HighlightColor::DarkAqua),
    ("DARK_RED", HighlightColor::DarkRed),
    ("DARK_PURPLE", HighlightColor::DarkPurple),
    ("GOLD", HighlightColor::Gold),
    ("GRAY", HighlightColor::Gray),
    ("DARK_GRAY", HighlightColor::DarkGray),
    ("BLUE", HighlightColor::Blue),
    ("GREEN", HighlightColor::Green),
    ("AQUA", HighlightColor::Aqua),
    ("RED", HighlightColor::Red),
    ("LIGHT_PURPLE", HighlightColor::LightPurple),
    ("YELLOW", HighlightColor::Yellow),
    ("WHITE", HighlightColor::White),
];

impl HighlightColor {
    /// Whether this is the "no explicit color" placeholder.
    pub fn is_none(&self) -> bool {
        matches!(self, HighlightColor::None)
    }

    /// Canonical config-file spelling.
    pub fn name(&self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
            .unwrap_or("NONE")
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color string is not in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown highlight color: {}", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for HighlightColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        NAMES
            .iter()
            .find(|(name, _)| *name == upper)
            .map(|(_, color)| *color)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
