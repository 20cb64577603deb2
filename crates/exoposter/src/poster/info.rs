//! Title, subtitle, description and legend.
//!
//! All text is right aligned at the right edge of the content canvas.

use exoposter_core::scene::{
    Circle, Collection, Color, Element, Opacity, Paint, Point, Text, TextAnchor, TextSize,
    TextStyle,
};

const TITLE: &str = "Known Planetary Systems";
const LINE_SPACING: f64 = 0.02;
const SUBTITLE_OFFSET: f64 = 0.045;

/// One legend row: a text and a marker in the given paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub text: &'static str,
    pub color: Color,
    pub opacity: Opacity,
}

pub const LEGEND: [LegendEntry; 4] = [
    LegendEntry {
        text: "Sun and planets of the solar system",
        color: Color::Red,
        opacity: Opacity::Medium,
    },
    LegendEntry {
        text: "Star, size relative to the sun",
        color: Color::Orange,
        opacity: Opacity::Medium,
    },
    LegendEntry {
        text: "Exoplanet, size relative to solar planets",
        color: Color::Green,
        opacity: Opacity::Medium,
    },
    LegendEntry {
        text: "Exoplanet, unknown size",
        color: Color::Green,
        opacity: Opacity::Low,
    },
];

/// Placeholder replaced by the creation date in subtitle lines.
const DATE_PLACEHOLDER: &str = "{date}";

/// Vertical placement of the information block.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoLayout {
    /// Title baseline.
    base: f64,
    /// Subtitle lines, with the creation date placeholder.
    subtitle: &'static [&'static str],
    description: &'static [&'static str],
    /// Description position below the title.
    description_offset: f64,
    /// Legend position below the title.
    legend_offset: f64,
    /// Vertical shift of legend markers onto the text's center line.
    legend_marker_y: f64,
}

impl InfoLayout {
    pub fn earthlike_distance() -> Self {
        Self {
            base: -0.03,
            subtitle: &["Earth-like Distance.", "Creation date: {date}"],
            description: &[
                "Planetary systems containing one",
                "planet that has about the same",
                "distance to its star as the",
                "earth to the sun.",
            ],
            description_offset: 0.2,
            legend_offset: 0.105,
            legend_marker_y: -0.003,
        }
    }

    pub fn planet_sizes() -> Self {
        Self {
            base: 0.04,
            subtitle: &["Planet sizes. Creation date: {date}"],
            description: &[
                "Planetary systems containing at",
                "least one planet with known size.",
            ],
            description_offset: 0.105,
            legend_offset: 0.26,
            legend_marker_y: -0.004,
        }
    }
}

fn info_text(origin: Point, content: impl Into<String>, size: TextSize) -> Element {
    Text::new(
        origin,
        content,
        size,
        TextAnchor::End,
        Paint::new(Color::Blue, Opacity::Full),
    )
    .into()
}

fn multiline(origin: Point, lines: impl IntoIterator<Item = String>) -> Element {
    let children = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| info_text(Point::new(0.0, index as f64 * LINE_SPACING), line, TextSize::M))
        .collect();
    Collection::new(origin, children).into()
}

/// Legend rows: text ending at the origin, marker right of it.
pub fn legend(origin: Point, entries: &[LegendEntry], text_style: &TextStyle, marker_y: f64) -> Element {
    let scale = text_style.scale(TextSize::M);
    let marker_radius = scale * 0.5;
    let marker_x = scale * 1.6;

    let rows = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let marker = Circle::new(
                Point::new(marker_x, marker_y),
                marker_radius,
                Paint::new(entry.color, entry.opacity),
            );
            Collection::new(
                Point::new(0.0, index as f64 * LINE_SPACING),
                vec![
                    info_text(Point::default(), entry.text, TextSize::M),
                    marker.into(),
                ],
            )
            .into()
        })
        .collect();
    Collection::new(origin, rows).into()
}

/// Title, subtitle, description and legend of a poster.
pub fn info_elements(layout: &InfoLayout, text_style: &TextStyle, creation_date: &str) -> Vec<Element> {
    let base = layout.base;
    vec![
        info_text(Point::new(1.0, base), TITLE, TextSize::L),
        multiline(
            Point::new(1.0, base + SUBTITLE_OFFSET),
            layout
                .subtitle
                .iter()
                .map(|line| line.replace(DATE_PLACEHOLDER, creation_date)),
        ),
        multiline(
            Point::new(1.0, base + layout.description_offset),
            layout.description.iter().map(|line| line.to_string()),
        ),
        legend(
            Point::new(1.0, base + layout.legend_offset),
            &LEGEND,
            text_style,
            layout.legend_marker_y,
        ),
    ]
}
