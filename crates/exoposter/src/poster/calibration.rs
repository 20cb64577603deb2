//! Fixed test page for checking printer and viewer output.
//!
//! Every element kind, text size and anchor appears once. The square of
//! black dots around the central planet checks that collections translate
//! without rescaling.

use exoposter_core::scene::{
    Canvas, Circle, Collection, Color, Element, Font, FontScale, Image, Line, Opacity, Page,
    PageSize, Paint, Point, Rectangle, Text, TextAnchor, TextSize, TextStyle,
};

const SQUARE_HALF_SIDE: f64 = 0.1;

fn text(origin: Point, content: impl Into<String>, size: TextSize, anchor: TextAnchor) -> Element {
    Text::new(origin, content, size, anchor, Paint::new(Color::Blue, Opacity::Medium)).into()
}

fn square(origin: Point) -> Element {
    let corner = |x: f64, y: f64| -> Element {
        Circle::new(
            Point::new(x * SQUARE_HALF_SIDE, y * SQUARE_HALF_SIDE),
            0.02,
            Paint::solid(Color::Black),
        )
        .into()
    };
    Collection::new(
        origin,
        vec![
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        ],
    )
    .into()
}

pub fn calibration_image(page_size: PageSize, font: Font) -> Image {
    let center = Point::new(0.5, 0.5);
    let elements = vec![
        Rectangle::new(Point::default(), 1.0, 1.0, Paint::new(Color::Yellow, Opacity::Medium)).into(),
        text(Point::new(0.3, 0.2), "L start anchor", TextSize::L, TextAnchor::Start),
        text(
            Point::new(0.3, 0.24),
            format!("{page_size} M start anchor"),
            TextSize::M,
            TextAnchor::Start,
        ),
        text(Point::new(0.3, 0.26), "S end anchor", TextSize::S, TextAnchor::End),
        Line::horizontal(Point::new(0.3, 0.28), 0.4, 0.002, Paint::new(Color::Blue, Opacity::Low)).into(),
        Circle::new(center, 0.03, Paint::new(Color::Green, Opacity::Medium)).into(),
        Rectangle::new(Point::new(0.5, 0.7), 0.01, 0.295, Paint::new(Color::Green, Opacity::Medium)).into(),
        Rectangle::new(Point::new(0.52, 0.7), 0.01, 0.29, Paint::new(Color::Green, Opacity::Medium)).into(),
        square(center),
        Circle::new(center, 0.01, Paint::new(Color::Orange, Opacity::Medium)).into(),
    ];

    let canvas = Canvas::bordered(elements, 0.1, 0.2, 0.3, 0.4);
    let text_style = TextStyle::new(font, FontScale::new(0.005, 0.0125, 0.035));
    Image::new(Page::with_size(page_size, canvas), text_style)
}
