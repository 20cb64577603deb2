//! Exoposter - vector posters comparing known planetary systems.
//!
//! Loads an exoplanet catalog, selects the systems a poster shows, composes
//! the poster scene and serializes it to SVG.

pub mod config;
pub mod export;
pub mod poster;
pub mod selection;

mod error;

pub use exoposter_catalog::{self as catalog, CatalogLoad};
pub use exoposter_core::{color, layout, scene};

pub use error::ExopError;

use log::{debug, info};

use config::AppConfig;
use exoposter_catalog::{
    CatalogLoader,
    model::SolarSystem,
    statistics::{CatalogStatistics, DEFAULT_SEPARATION_THRESHOLD},
};
use export::{Exporter, svg::SvgRenderer};
use poster::{PosterKind, PosterLayout, SceneBuilder};
use scene::{Image, PageSize};

/// A loaded catalog together with its reference system.
#[derive(Debug)]
pub struct Catalog {
    load: CatalogLoad,
    reference: SolarSystem,
}

impl Catalog {
    pub fn new(load: CatalogLoad, reference: SolarSystem) -> Self {
        Self { load, reference }
    }

    pub fn load(&self) -> &CatalogLoad {
        &self.load
    }

    pub fn systems(&self) -> &[SolarSystem] {
        self.load.systems()
    }

    pub fn reference(&self) -> &SolarSystem {
        &self.reference
    }
}

/// Builder for selecting, composing and rendering posters.
///
/// The builder holds only configuration. Every call works on its own data,
/// so one builder can serve independent renders.
///
/// # Examples
///
/// ```rust,no_run
/// use exoposter::{PosterBuilder, config::AppConfig, poster::PosterKind, scene::PageSize};
///
/// let builder = PosterBuilder::new(AppConfig::default());
///
/// let catalog = builder.load_catalog().expect("Failed to load catalog");
/// let systems = builder.select(PosterKind::PlanetSizes, &catalog);
/// let image = builder
///     .build_scene(PosterKind::PlanetSizes, PageSize::A3, &systems, "Oct 2026")
///     .expect("Failed to build scene");
/// let svg = builder.render_svg(&image).expect("Failed to render");
///
/// // Or the whole pipeline in one call
/// let svg = builder
///     .render_poster(PosterKind::EarthlikeDistance, PageSize::A4, "Oct 2026")
///     .expect("Failed to render poster");
/// ```
#[derive(Debug, Default)]
pub struct PosterBuilder {
    config: AppConfig,
}

impl PosterBuilder {
    /// Create a new poster builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load the configured catalog and its reference system.
    ///
    /// # Errors
    ///
    /// Returns `ExopError::Catalog` if the catalog directory is missing, the
    /// reference system cannot be loaded, or a document fails while the
    /// catalog is configured to fail fast.
    pub fn load_catalog(&self) -> Result<Catalog, ExopError> {
        let loader = CatalogLoader::new(self.config.catalog().clone());
        let load = loader.load()?;
        let reference = loader.load_reference()?;
        debug!(reference = reference.id(); "Reference system loaded");
        Ok(Catalog::new(load, reference))
    }

    /// Summarize the configured catalog.
    ///
    /// Does not require the reference system to be present.
    pub fn catalog_statistics(&self) -> Result<CatalogStatistics, ExopError> {
        let load = CatalogLoader::new(self.config.catalog().clone()).load()?;
        Ok(CatalogStatistics::from_load(&load, DEFAULT_SEPARATION_THRESHOLD))
    }

    fn layout(&self, kind: PosterKind) -> Option<PosterLayout> {
        match kind {
            PosterKind::EarthlikeDistance => Some(PosterLayout::earthlike_distance()),
            PosterKind::PlanetSizes => Some(PosterLayout::planet_sizes(self.config.poster().max_extent())),
            PosterKind::Calibration => None,
        }
    }

    /// Select and order the systems shown on a poster.
    ///
    /// The calibration poster shows no systems.
    pub fn select(&self, kind: PosterKind, catalog: &Catalog) -> Vec<SolarSystem> {
        let poster = self.config.poster();
        let ranked = match kind {
            PosterKind::EarthlikeDistance => selection::rank_nearest(
                catalog.systems(),
                catalog.reference(),
                poster.system_count(),
                poster.target_distance(),
            ),
            PosterKind::PlanetSizes => selection::rank_max_extent(
                catalog.systems(),
                catalog.reference(),
                poster.system_count(),
                poster.max_extent(),
            ),
            PosterKind::Calibration => Vec::new(),
        };
        info!(poster:% = kind, selected = ranked.len(); "Systems selected");
        ranked.into_iter().cloned().collect()
    }

    /// Compose the scene of a poster.
    ///
    /// # Arguments
    ///
    /// * `systems` - Systems in row order, as returned by [`select`](Self::select).
    /// * `creation_date` - Date shown in the subtitle, e.g. `"Oct 2026"`.
    ///
    /// # Errors
    ///
    /// Returns `ExopError::Selection` if a data poster gets no systems.
    pub fn build_scene(
        &self,
        kind: PosterKind,
        page_size: PageSize,
        systems: &[SolarSystem],
        creation_date: &str,
    ) -> Result<Image, ExopError> {
        let builder = SceneBuilder::new(self.config.names().resolver(), self.config.style().font());
        match self.layout(kind) {
            Some(layout) => {
                let rows: Vec<&SolarSystem> = systems.iter().collect();
                Ok(builder.build(&layout, page_size, &rows, creation_date)?)
            }
            None => Ok(builder.build_calibration(page_size)),
        }
    }

    /// Render a poster scene to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `ExopError::Config` for invalid style settings and
    /// `ExopError::Render` if the scene cannot be resolved.
    pub fn render_svg(&self, image: &Image) -> Result<String, ExopError> {
        let style = self.config.style();
        let palette = style.palette().map_err(ExopError::Config)?;
        let background = style.background_color().map_err(ExopError::Config)?;

        let renderer = SvgRenderer::new()
            .with_palette(palette)
            .with_background(background);
        Ok(renderer.export(image)?)
    }

    /// Run the whole pipeline for one poster.
    ///
    /// The catalog is only read for posters that show catalog data.
    pub fn render_poster(
        &self,
        kind: PosterKind,
        page_size: PageSize,
        creation_date: &str,
    ) -> Result<String, ExopError> {
        info!(poster:% = kind, page_size:% = page_size; "Rendering poster");

        let systems = if kind.needs_catalog() {
            let catalog = self.load_catalog()?;
            self.select(kind, &catalog)
        } else {
            Vec::new()
        };

        let image = self.build_scene(kind, page_size, &systems, creation_date)?;
        self.render_svg(&image)
    }
}
