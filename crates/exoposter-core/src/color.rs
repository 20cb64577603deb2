//! CSS color handling for poster output.
//!
//! Scene elements name colors from the closed [`scene::Color`] set. A
//! [`Palette`] maps each of them to a concrete CSS color, parsed and
//! validated through the `color` crate, so posters can be re-themed from
//! configuration without touching the scene builder.

use std::{collections::HashMap, str::FromStr};

use color::DynamicColor;

use crate::scene;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CssColor {
    color: DynamicColor,
}

impl CssColor {
    /// Parses a CSS color string such as `"#ff0000"`, `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exoposter_core::color::CssColor;
    ///
    /// let red = CssColor::new("#ff0000").unwrap();
    /// assert!(CssColor::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha component, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl std::fmt::Display for CssColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&CssColor> for svg::node::Value {
    fn from(color: &CssColor) -> Self {
        Self::from(color.to_string())
    }
}

/// Maps the closed scene colors to CSS values.
///
/// Colors without an override render as their CSS keyword.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    overrides: HashMap<scene::Color, CssColor>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a palette from configured overrides.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first value that is not a valid CSS color.
    pub fn from_overrides<'a>(
        overrides: impl IntoIterator<Item = (scene::Color, &'a str)>,
    ) -> Result<Self, String> {
        let mut palette = Self::new();
        for (color, value) in overrides {
            let css = CssColor::new(value).map_err(|err| format!("palette entry `{color}`: {err}"))?;
            palette.overrides.insert(color, css);
        }
        Ok(palette)
    }

    /// CSS value for a scene color.
    pub fn css(&self, color: scene::Color) -> String {
        self.overrides
            .get(&color)
            .map(CssColor::to_string)
            .unwrap_or_else(|| color.css_name().to_string())
    }
}
