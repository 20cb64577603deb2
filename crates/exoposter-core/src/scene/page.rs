//! Physical page definitions.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use super::{Canvas, TextStyle};

/// ISO 216 A-series page sizes in portrait orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum PageSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
}

impl PageSize {
    /// Width in millimeters.
    pub fn width_mm(self) -> f64 {
        match self {
            Self::A0 => 841.0,
            Self::A1 => 594.0,
            Self::A2 => 420.0,
            Self::A3 => 297.0,
            Self::A4 => 210.0,
            Self::A5 => 148.0,
        }
    }

    /// Height in millimeters.
    pub fn height_mm(self) -> f64 {
        match self {
            Self::A0 => 1189.0,
            Self::A1 => 841.0,
            Self::A2 => 594.0,
            Self::A3 => 420.0,
            Self::A4 => 297.0,
            Self::A5 => 210.0,
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A0" => Ok(Self::A0),
            "A1" => Ok(Self::A1),
            "A2" => Ok(Self::A2),
            "A3" => Ok(Self::A3),
            "A4" => Ok(Self::A4),
            "A5" => Ok(Self::A5),
            _ => Err(format!("unknown page size `{s}`, expected one of A0..A5")),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The root of a scene: a canvas placed on a physical page.
///
/// The root canvas' origin and size are fractions of the page dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    width_mm: f64,
    height_mm: f64,
    canvas: Canvas,
}

impl Page {
    pub fn new(width_mm: f64, height_mm: f64, canvas: Canvas) -> Self {
        Self {
            width_mm,
            height_mm,
            canvas,
        }
    }

    /// Creates a page with the dimensions of a standard size.
    pub fn with_size(size: PageSize, canvas: Canvas) -> Self {
        Self::new(size.width_mm(), size.height_mm(), canvas)
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

/// A complete poster: the page plus the text style used for every text element.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    page: Page,
    text_style: TextStyle,
}

impl Image {
    pub fn new(page: Page, text_style: TextStyle) -> Self {
        Self { page, text_style }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn text_style(&self) -> &TextStyle {
        &self.text_style
    }
}
