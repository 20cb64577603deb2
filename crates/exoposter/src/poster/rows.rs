//! One row per system: orbit line, star marker, planet markers and labels.

use exoposter_catalog::{
    model::{Planet, SolarSystem},
    names::NameResolver,
    orbit::EARTH_DISTANCE,
};
use exoposter_core::scene::{
    Circle, Collection, Color, Element, Line, Opacity, Paint, Point, Text, TextAnchor, TextSize,
};

use super::PosterLayout;
use crate::selection::BatchStatistics;

/// Distance in AU used to place planets whose distance is unknown.
pub const UNKNOWN_DISTANCE_FALLBACK: f64 = EARTH_DISTANCE;

/// Marker sizes of a row, as fractions of the canvas height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStyle {
    /// Radius of the largest star of the batch.
    pub star_marker: f64,
    /// Radius of the largest planet of the batch.
    pub planet_marker: f64,
    /// Radius of a planet of unknown size, relative to `planet_marker`.
    pub unknown_planet: f64,
    pub line_stroke: f64,
    /// Gap between a marker and its label.
    pub text_offset: f64,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            star_marker: 0.003,
            planet_marker: 0.017,
            unknown_planet: 0.25,
            line_stroke: 0.0008,
            text_offset: 0.001,
        }
    }
}

fn label(origin: Point, content: &str, anchor: TextAnchor) -> Element {
    Text::new(
        origin,
        content,
        TextSize::S,
        anchor,
        Paint::new(Color::Blue, Opacity::Full),
    )
    .into()
}

/// Builds the row of one system at relative height `y`.
pub fn system_row(
    system: &SolarSystem,
    y: f64,
    layout: &PosterLayout,
    stats: &BatchStatistics,
    resolver: &NameResolver,
) -> Element {
    let style = &layout.rows;
    let solar = system.is_solar_system();
    let label_start = Point::new(style.text_offset, -style.text_offset);
    let label_end = Point::new(-style.text_offset, -style.text_offset);

    let mut children = Vec::new();

    if let Some(extent) = system.star().max_planet_distance() {
        let length = (extent / layout.scale_distance).min(1.0);
        children.push(
            Line::horizontal(
                Point::default(),
                length,
                style.line_stroke,
                Paint::new(Color::Blue, Opacity::Low),
            )
            .into(),
        );
    }

    children.push(star_marker(system, style, stats, resolver, label_start));
    children.push(label(label_end, system.name(), TextAnchor::End));

    children.extend(system.star().planets().iter().filter_map(|planet| {
        planet_marker(planet, solar, system.name(), layout, stats, resolver, label_start)
    }));

    Collection::new(Point::new(0.0, y), children).into()
}

fn star_marker(
    system: &SolarSystem,
    style: &RowStyle,
    stats: &BatchStatistics,
    resolver: &NameResolver,
    label_origin: Point,
) -> Element {
    let star = system.star();
    let color = if system.is_solar_system() {
        Color::Red
    } else {
        Color::Orange
    };
    let opacity = if star.radius().is_some() {
        Opacity::Medium
    } else {
        Opacity::Low
    };
    let radius = style.star_marker * stats.relative_star_radius(star.radius());

    let mut children = vec![Circle::new(Point::default(), radius, Paint::new(color, opacity)).into()];
    if let Some(name) = resolver
        .star_name(star.names())
        .filter(|name| *name != system.name())
    {
        children.push(label(label_origin, name, TextAnchor::Start));
    }
    Collection::new(Point::default(), children).into()
}

/// Marker of one planet, `None` if it lies beyond the right edge.
fn planet_marker(
    planet: &Planet,
    solar: bool,
    system_name: &str,
    layout: &PosterLayout,
    stats: &BatchStatistics,
    resolver: &NameResolver,
    label_origin: Point,
) -> Option<Element> {
    let style = &layout.rows;
    let x = planet.distance().unwrap_or(UNKNOWN_DISTANCE_FALLBACK) / layout.scale_distance;
    if x > 1.0 {
        return None;
    }

    let color = if solar { Color::Red } else { Color::Green };
    let known = planet
        .radius()
        .and_then(|radius| stats.relative_planet_radius(radius));
    let (radius, opacity) = match known {
        Some(relative) => (style.planet_marker * relative, Opacity::Medium),
        None => (style.planet_marker * style.unknown_planet, Opacity::Low),
    };

    let mut children = vec![Circle::new(Point::default(), radius, Paint::new(color, opacity)).into()];
    if let Some(name) = resolver.planet_name(planet.names(), system_name) {
        children.push(label(label_origin, name, TextAnchor::Start));
    }
    Some(Collection::new(Point::new(x, 0.0), children).into())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use exoposter_catalog::model::Star;

    use super::*;

    fn row_children(element: &Element) -> &[Element] {
        match element {
            Element::Collection(collection) => collection.children(),
            other => panic!("expected collection, got {}", other.kind()),
        }
    }

    fn circle_of(element: &Element) -> &Circle {
        match &row_children(element)[0] {
            Element::Circle(circle) => circle,
            other => panic!("expected circle, got {}", other.kind()),
        }
    }

    fn texts(elements: &[Element]) -> Vec<&str> {
        elements
            .iter()
            .filter_map(|element| match element {
                Element::Text(text) => Some(text.content()),
                _ => None,
            })
            .collect()
    }

    fn kepler_22(planets: Vec<Planet>) -> SolarSystem {
        SolarSystem::new(
            "Kepler-22",
            "Kepler-22",
            Star::new(vec!["Kepler-22".into()], Some(0.98), Some(0.97), planets, None),
        )
    }

    #[test]
    fn test_known_radius_unknown_period_uses_fallback_position() {
        let planet = Planet::new(vec!["Kepler-22 b".into()], "Kepler-22", Some(0.2), None, Some(0.97));
        let system = kepler_22(vec![planet]);
        let stats = BatchStatistics::from_systems(&[&system]).unwrap();
        let layout = PosterLayout::earthlike_distance();

        let row = system_row(&system, 0.0, &layout, &stats, &NameResolver::default());
        let children = row_children(&row);

        // No planet distance, so no orbit line: star, system name, planet.
        assert_eq!(children.len(), 3);
        let planet = &children[2];
        assert_approx_eq!(f64, planet.origin().x(), 1.0 / 1.6);

        let marker = circle_of(planet);
        assert_eq!(marker.paint().opacity(), Some(Opacity::Medium));
        assert_approx_eq!(f64, marker.radius(), layout.rows.planet_marker);
        assert_eq!(texts(row_children(planet)), ["b"]);
    }

    #[test]
    fn test_unknown_radius_uses_placeholder() {
        let sized = Planet::new(vec!["Kepler-22 b".into()], "Kepler-22", Some(0.2), Some(289.9), Some(0.97));
        let unsized_planet = Planet::new(vec!["Kepler-22 c".into()], "Kepler-22", None, Some(100.0), Some(0.97));
        let system = kepler_22(vec![sized, unsized_planet]);
        let stats = BatchStatistics::from_systems(&[&system]).unwrap();
        let layout = PosterLayout::earthlike_distance();

        let row = system_row(&system, 0.5, &layout, &stats, &NameResolver::default());
        let children = row_children(&row);

        let placeholder = circle_of(&children[4]);
        assert_eq!(placeholder.paint().opacity(), Some(Opacity::Low));
        assert_eq!(placeholder.paint().color(), Some(Color::Green));
        assert_approx_eq!(
            f64,
            placeholder.radius(),
            layout.rows.planet_marker * layout.rows.unknown_planet
        );
        assert_approx_eq!(f64, row.origin().y(), 0.5);
    }

    #[test]
    fn test_planet_beyond_scale_is_omitted() {
        let far = Planet::new(vec!["Far".into()], "Kepler-22", None, Some(4000.0), Some(1.0));
        let system = kepler_22(vec![far]);
        let stats = BatchStatistics::from_systems(&[&system]).unwrap();

        let row = system_row(&system, 0.0, &PosterLayout::earthlike_distance(), &stats, &NameResolver::default());
        let children = row_children(&row);

        // Line, star, system name; the line is clamped to the row width.
        assert_eq!(children.len(), 3);
        match &children[0] {
            Element::Line(line) => assert_approx_eq!(f64, line.end().x(), 1.0),
            other => panic!("expected line, got {}", other.kind()),
        }
    }

    #[test]
    fn test_star_label_omitted_when_equal_to_system_name() {
        let planet = Planet::new(vec!["Kepler-22 b".into()], "Kepler-22", None, None, None);
        let system = kepler_22(vec![planet]);
        let stats = BatchStatistics::from_systems(&[&system]).unwrap();

        let row = system_row(&system, 0.0, &PosterLayout::earthlike_distance(), &stats, &NameResolver::default());
        let star = &row_children(&row)[0];

        assert!(texts(row_children(star)).is_empty());
        assert_eq!(texts(row_children(&row)), ["Kepler-22"]);
    }

    #[test]
    fn test_solar_system_is_red() {
        let earth = Planet::new(vec!["Earth".into()], "Solar System", Some(0.09), Some(365.25), Some(1.0));
        let sun = SolarSystem::new(
            "Sun",
            "Solar System",
            Star::new(vec!["Sun".into()], Some(1.0), Some(1.0), vec![earth], None),
        );
        let stats = BatchStatistics::from_systems(&[&sun]).unwrap();

        let row = system_row(&sun, 0.0, &PosterLayout::earthlike_distance(), &stats, &NameResolver::default());
        let children = row_children(&row);

        let star = circle_of(&children[1]);
        assert_eq!(star.paint().color(), Some(Color::Red));
        assert_eq!(texts(row_children(&children[1])), ["Sun"]);
        assert_eq!(circle_of(&children[3]).paint().color(), Some(Color::Red));
    }
}
