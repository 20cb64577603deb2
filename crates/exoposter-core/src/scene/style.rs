//! Closed style vocabularies used by drawable scene elements.
//!
//! Scene elements never carry free-form colors or font sizes. They pick from
//! the small enumerations defined here, and the renderer maps each value to a
//! concrete SVG attribute.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Named colors available to drawable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Orange,
    Green,
    Blue,
    Yellow,
    Black,
    Red,
    White,
}

impl Color {
    /// All colors in declaration order.
    pub const ALL: [Color; 7] = [
        Color::Orange,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Black,
        Color::Red,
        Color::White,
    ];

    /// The CSS keyword used when no palette override is configured.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Black => "black",
            Self::Red => "red",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Opacity levels for drawable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opacity {
    Full,
    Medium,
    Low,
    XLow,
}

impl Opacity {
    pub fn value(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Medium => 0.7,
            Self::Low => 0.4,
            Self::XLow => 0.1,
        }
    }
}

/// Logical text size, mapped to a fraction of the page height by a [`TextStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSize {
    S,
    M,
    L,
}

/// Horizontal anchoring of a text element relative to its origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the origin and extends to the right.
    #[default]
    Start,
    /// Text ends at the origin, extending to the left.
    End,
}

/// Font families known to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Font {
    SansSerif,
    Serif,
    Monospace,
    #[default]
    TurretRoad,
    LeagueScript,
}

impl Font {
    /// Value for the SVG `font-family` attribute.
    pub fn family(self) -> &'static str {
        match self {
            Self::SansSerif => "sans-serif",
            Self::Serif => "serif",
            Self::Monospace => "monospace",
            Self::TurretRoad => "'Turret Road', cursive",
            Self::LeagueScript => "'League Script', cursive",
        }
    }

    /// CSS import rule for web fonts, `None` for generic families.
    pub fn import(self) -> Option<&'static str> {
        match self {
            Self::SansSerif | Self::Serif | Self::Monospace => None,
            Self::TurretRoad => Some(
                "@import url('https://fonts.googleapis.com/css2?family=Turret+Road:wght@500&display=swap');",
            ),
            Self::LeagueScript => Some(
                "@import url('https://fonts.googleapis.com/css2?family=League+Script&display=swap');",
            ),
        }
    }
}

impl FromStr for Font {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sans-serif" => Ok(Self::SansSerif),
            "serif" => Ok(Self::Serif),
            "monospace" => Ok(Self::Monospace),
            "turret-road" => Ok(Self::TurretRoad),
            "league-script" => Ok(Self::LeagueScript),
            _ => Err(format!("unknown font `{s}`")),
        }
    }
}

/// Scale fractions of the page height for each [`TextSize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    small: f64,
    medium: f64,
    large: f64,
}

impl FontScale {
    pub fn new(small: f64, medium: f64, large: f64) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }

    /// Fraction of the page height used for text of the given size.
    pub fn fraction(&self, size: TextSize) -> f64 {
        match size {
            TextSize::S => self.small,
            TextSize::M => self.medium,
            TextSize::L => self.large,
        }
    }
}

/// Font family plus the size mapping shared by all text on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    font: Font,
    scale: FontScale,
}

impl TextStyle {
    pub fn new(font: Font, scale: FontScale) -> Self {
        Self { font, scale }
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// Fraction of the page height for the given logical size.
    pub fn scale(&self, size: TextSize) -> f64 {
        self.scale.fraction(size)
    }

    /// Absolute font size in millimeters on a page of the given height.
    pub fn font_size_mm(&self, size: TextSize, page_height_mm: f64) -> f64 {
        page_height_mm * self.scale(size)
    }
}
