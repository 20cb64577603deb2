//! Configuration types for poster rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file. Every section and field is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`CatalogConfig`] - Catalog location and load policy.
//! - [`NamesConfig`] - Catalog prefixes used for star names.
//! - [`PosterConfig`] - Page size and selection parameters.
//! - [`StyleConfig`] - Font, background and palette overrides.
//!
//! # Example
//!
//! ```
//! # use exoposter::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().palette().is_ok());
//! assert_eq!(config.poster().system_count(), 100);
//! ```

use std::collections::HashMap;

use serde::Deserialize;

pub use exoposter_catalog::CatalogConfig;
use exoposter_catalog::names::NameResolver;
use exoposter_core::{
    color::{CssColor, Palette},
    scene::{Color, Font, PageSize},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    catalog: CatalogConfig,

    #[serde(default)]
    names: NamesConfig,

    #[serde(default)]
    poster: PosterConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(
        catalog: CatalogConfig,
        names: NamesConfig,
        poster: PosterConfig,
        style: StyleConfig,
    ) -> Self {
        Self {
            catalog,
            names,
            poster,
            style,
        }
    }

    /// Returns a copy with the catalog configuration replaced.
    pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    pub fn names(&self) -> &NamesConfig {
        &self.names
    }

    pub fn poster(&self) -> &PosterConfig {
        &self.poster
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Catalog designation prefixes skipped when naming stars.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamesConfig {
    /// Replaces the built-in prefix list when set.
    #[serde(default)]
    catalog_prefixes: Option<Vec<String>>,
}

impl NamesConfig {
    pub fn new(catalog_prefixes: Option<Vec<String>>) -> Self {
        Self { catalog_prefixes }
    }

    /// Builds the [`NameResolver`] for this configuration.
    pub fn resolver(&self) -> NameResolver {
        match &self.catalog_prefixes {
            Some(prefixes) => NameResolver::with_prefixes(prefixes.iter().cloned()),
            None => NameResolver::default(),
        }
    }
}

fn default_system_count() -> usize {
    100
}

fn default_target_distance() -> f64 {
    exoposter_catalog::orbit::EARTH_DISTANCE
}

fn default_max_extent() -> f64 {
    5.0
}

/// Page and selection parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PosterConfig {
    /// Default page size when the caller does not request one.
    #[serde(default)]
    page_size: PageSize,

    /// Number of systems shown besides the reference system.
    #[serde(default = "default_system_count")]
    system_count: usize,

    /// Orbital distance, in AU, the earth-like poster ranks against.
    #[serde(default = "default_target_distance")]
    target_distance: f64,

    /// Largest system extent, in AU, shown on the size poster.
    #[serde(default = "default_max_extent")]
    max_extent: f64,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            system_count: default_system_count(),
            target_distance: default_target_distance(),
            max_extent: default_max_extent(),
        }
    }
}

impl PosterConfig {
    pub fn new(page_size: PageSize, system_count: usize, target_distance: f64, max_extent: f64) -> Self {
        Self {
            page_size,
            system_count,
            target_distance,
            max_extent,
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn system_count(&self) -> usize {
        self.system_count
    }

    pub fn target_distance(&self) -> f64 {
        self.target_distance
    }

    pub fn max_extent(&self) -> f64 {
        self.max_extent
    }
}

/// Visual styling of the rendered document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Font family for every text element.
    #[serde(default)]
    font: Font,

    /// Background color of the SVG document, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// CSS overrides for the named scene colors.
    #[serde(default)]
    palette: HashMap<Color, String>,
}

impl StyleConfig {
    pub fn new(font: Font, background_color: Option<String>, palette: HashMap<Color, String>) -> Self {
        Self {
            font,
            background_color,
            palette,
        }
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// Returns the parsed background color, or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid CSS color.
    pub fn background_color(&self) -> Result<Option<CssColor>, String> {
        self.background_color
            .as_deref()
            .map(CssColor::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Builds the palette from the configured overrides.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid override.
    pub fn palette(&self) -> Result<Palette, String> {
        Palette::from_overrides(
            self.palette
                .iter()
                .map(|(color, value)| (*color, value.as_str())),
        )
        .map_err(|err| format!("Invalid palette in config: {err}"))
    }
}
