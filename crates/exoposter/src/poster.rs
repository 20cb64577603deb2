//! Poster variants and the scene builder.
//!
//! A poster is one [`Image`]: a bordered canvas holding a background fill,
//! an information block (title, subtitle, description and legend) and one
//! row per selected system. [`PosterKind`] names the variants and
//! [`PosterLayout`] carries the parameters that differ between them.

mod calibration;
mod info;
mod rows;

use std::{fmt, str::FromStr};

use log::{debug, info};

use exoposter_catalog::{model::SolarSystem, names::NameResolver};
use exoposter_core::scene::{
    Canvas, Color, Element, Font, FontScale, Image, Opacity, Page, PageSize, Paint, Rectangle,
    TextStyle,
};

use crate::selection::{BatchStatistics, SelectionError};

use info::InfoLayout;
use rows::RowStyle;

/// The poster variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosterKind {
    /// Systems with a planet at about the earth's distance from its star.
    EarthlikeDistance,
    /// Systems with at least one planet of known size.
    PlanetSizes,
    /// A fixed page exercising every element kind.
    Calibration,
}

impl PosterKind {
    pub const ALL: [PosterKind; 3] = [
        PosterKind::EarthlikeDistance,
        PosterKind::PlanetSizes,
        PosterKind::Calibration,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::EarthlikeDistance => "earthlike-distance",
            Self::PlanetSizes => "planet-sizes",
            Self::Calibration => "calibration",
        }
    }

    /// Whether the poster shows catalog data.
    pub fn needs_catalog(self) -> bool {
        !matches!(self, Self::Calibration)
    }
}

impl fmt::Display for PosterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PosterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|kind| kind.name()).collect();
                format!("unknown poster `{s}`, expected one of: {}", names.join(", "))
            })
    }
}

/// Fractions of the page kept free on each side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Borders {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Borders {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    fn canvas(&self, children: Vec<Element>) -> Canvas {
        Canvas::bordered(children, self.top, self.right, self.bottom, self.left)
    }
}

/// Parameters of a data poster.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterLayout {
    /// Distance in AU that maps to the full row width.
    scale_distance: f64,
    borders: Borders,
    font_scale: FontScale,
    rows: RowStyle,
    info: InfoLayout,
}

impl PosterLayout {
    /// Layout of the earth-like distance poster.
    pub fn earthlike_distance() -> Self {
        Self {
            scale_distance: 1.6,
            borders: Borders::new(0.1, 0.1, 0.05, 0.08),
            font_scale: FontScale::new(0.005, 0.01, 0.035),
            rows: RowStyle {
                star_marker: 0.003,
                planet_marker: 0.017,
                ..RowStyle::default()
            },
            info: InfoLayout::earthlike_distance(),
        }
    }

    /// Layout of the planet size poster for systems up to `max_extent` AU.
    pub fn planet_sizes(max_extent: f64) -> Self {
        Self {
            scale_distance: max_extent,
            borders: Borders::new(0.05, 0.1, 0.05, 0.07),
            font_scale: FontScale::new(0.005, 0.0125, 0.035),
            rows: RowStyle {
                star_marker: 0.006,
                planet_marker: 0.01,
                ..RowStyle::default()
            },
            info: InfoLayout::planet_sizes(),
        }
    }

    pub fn scale_distance(&self) -> f64 {
        self.scale_distance
    }

    pub fn borders(&self) -> Borders {
        self.borders
    }
}

/// Relative y position of row `index` among `count` equally spaced rows.
///
/// A single row sits at the top.
pub fn row_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}

/// Composes poster scenes.
///
/// Holds no per-poster state; one builder can serve any number of posters.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    resolver: NameResolver,
    font: Font,
}

impl SceneBuilder {
    pub fn new(resolver: NameResolver, font: Font) -> Self {
        Self { resolver, font }
    }

    /// Builds a data poster for the given systems, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::EmptyBatch`] if `systems` is empty.
    pub fn build(
        &self,
        layout: &PosterLayout,
        page_size: PageSize,
        systems: &[&SolarSystem],
        creation_date: &str,
    ) -> Result<Image, SelectionError> {
        let stats = BatchStatistics::from_systems(systems)?;
        debug!(
            rows = systems.len(),
            max_star_radius = stats.max_star_radius();
            "Building poster scene"
        );

        let text_style = TextStyle::new(self.font, layout.font_scale);
        let background = Rectangle::fill(Paint::new(Color::Yellow, Opacity::XLow));

        let mut children = vec![Element::from(background)];
        children.extend(info::info_elements(&layout.info, &text_style, creation_date));
        children.extend(systems.iter().enumerate().map(|(index, system)| {
            rows::system_row(
                system,
                row_position(index, systems.len()),
                layout,
                &stats,
                &self.resolver,
            )
        }));

        let canvas = layout.borders.canvas(children);
        let image = Image::new(Page::with_size(page_size, canvas), text_style);
        info!(page_size:% = page_size, rows = systems.len(); "Poster scene built");
        Ok(image)
    }

    /// Builds the calibration page.
    pub fn build_calibration(&self, page_size: PageSize) -> Image {
        calibration::calibration_image(page_size, self.font)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use exoposter_catalog::model::{Planet, Star};

    use super::*;

    #[test]
    fn test_poster_kind_round_trip_names() {
        for kind in PosterKind::ALL {
            assert_eq!(kind.name().parse::<PosterKind>(), Ok(kind));
        }
        assert!("orbits".parse::<PosterKind>().unwrap_err().contains("planet-sizes"));
    }

    #[test]
    fn test_row_position() {
        assert_approx_eq!(f64, row_position(0, 1), 0.0);
        assert_approx_eq!(f64, row_position(0, 5), 0.0);
        assert_approx_eq!(f64, row_position(2, 5), 0.5);
        assert_approx_eq!(f64, row_position(4, 5), 1.0);
    }

    #[test]
    fn test_build_rejects_empty_batch() {
        let builder = SceneBuilder::default();
        let result = builder.build(&PosterLayout::earthlike_distance(), PageSize::A4, &[], "Jan 2026");
        assert_eq!(result.unwrap_err(), SelectionError::EmptyBatch);
    }

    #[test]
    fn test_build_page_structure() {
        let planet = Planet::new(vec!["Earth".into()], "Solar System", Some(0.09), Some(365.25), Some(1.0));
        let sun = SolarSystem::new(
            "Sun",
            "Solar System",
            Star::new(vec!["Sun".into()], Some(1.0), Some(1.0), vec![planet], None),
        );

        let layout = PosterLayout::planet_sizes(5.0);
        let image = SceneBuilder::default()
            .build(&layout, PageSize::A3, &[&sun], "Jan 2026")
            .unwrap();

        let page = image.page();
        assert_approx_eq!(f64, page.width_mm(), 297.0);
        assert_approx_eq!(f64, page.height_mm(), 420.0);

        let canvas = page.canvas();
        assert_approx_eq!(f64, canvas.origin().x(), 0.07);
        assert_approx_eq!(f64, canvas.width(), 1.0 - 0.07 - 0.1);
        assert!(matches!(canvas.children()[0], Element::Rectangle(_)));
        assert!(matches!(canvas.children().last(), Some(Element::Collection(_))));
    }
}
