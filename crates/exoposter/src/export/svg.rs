//! SVG output.
//!
//! The scene is walked depth first. Each canvas or collection extends the
//! [`CoordinateSpace`] its children are resolved in, and each drawable leaf
//! becomes one SVG primitive with absolute millimeter coordinates. Primitives
//! are grouped per [`RenderLayer`] so text always ends up on top.

mod elements;

use log::{debug, info};
use svg::{
    Document,
    node::element::{Definitions, Style},
};

use exoposter_core::{
    color::{CssColor, Palette},
    layer::{LayeredOutput, RenderLayer},
    layout::CoordinateSpace,
    scene::{Element, Image},
};

use super::{Exporter, RenderError};

/// Formats a length in millimeters with three decimals.
pub(crate) fn mm(value: f64) -> String {
    format!("{value:.3}mm")
}

/// Renders poster scenes to SVG documents.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    palette: Palette,
    background: Option<CssColor>,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the palette mapping scene colors to CSS values.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the background color of the document.
    pub fn with_background(mut self, background: Option<CssColor>) -> Self {
        self.background = background;
        self
    }

    /// Renders a scene into an SVG [`Document`].
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a resolved value is not finite.
    pub fn render(&self, image: &Image) -> Result<Document, RenderError> {
        let page = image.page();
        let root = CoordinateSpace::for_page(page).enter_canvas(page.canvas());

        let mut output = LayeredOutput::new();
        for child in page.canvas().children() {
            self.render_element(child, &root, image, &mut output)?;
        }
        debug!(
            shapes = output.count(RenderLayer::Background) + output.count(RenderLayer::Content),
            texts = output.count(RenderLayer::Text);
            "Scene resolved"
        );

        let mut doc = Document::new()
            .set("width", mm(page.width_mm()))
            .set("height", mm(page.height_mm()));

        if let Some(background) = &self.background {
            doc = doc.set("style", format!("background-color: {background}"));
        }

        if let Some(import) = image.text_style().font().import() {
            doc = doc.add(Definitions::new().add(Style::new(import)));
        }

        for group in output.render() {
            doc = doc.add(group);
        }

        info!(width = page.width_mm(), height = page.height_mm(); "SVG document rendered");
        Ok(doc)
    }

    fn render_element(
        &self,
        element: &Element,
        space: &CoordinateSpace,
        image: &Image,
        output: &mut LayeredOutput,
    ) -> Result<(), RenderError> {
        match element {
            Element::Circle(circle) => {
                output.add_to_layer(RenderLayer::Content, self.circle(circle, space)?);
            }
            Element::Rectangle(rect) => {
                output.add_to_layer(RenderLayer::Background, self.rectangle(rect, space)?);
            }
            Element::Line(line) => {
                output.add_to_layer(RenderLayer::Content, self.line(line, space)?);
            }
            Element::Text(text) => {
                output.add_to_layer(
                    RenderLayer::Text,
                    self.text(text, space, image.text_style())?,
                );
            }
            Element::Collection(collection) => {
                let inner = space.enter_collection(collection);
                for child in collection.children() {
                    self.render_element(child, &inner, image, output)?;
                }
            }
            Element::Canvas(canvas) => {
                let inner = space.enter_canvas(canvas);
                for child in canvas.children() {
                    self.render_element(child, &inner, image, output)?;
                }
            }
        }
        Ok(())
    }
}

impl Exporter for SvgRenderer {
    fn export(&self, image: &Image) -> Result<String, RenderError> {
        Ok(self.render(image)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use exoposter_core::{
        layout::LayoutError,
        scene::{
            Canvas, Circle, Collection, Color, Font, FontScale, Line, Opacity, Page, PageSize,
            Paint, Point, Rectangle, Text, TextAnchor, TextSize, TextStyle,
        },
    };

    use super::*;

    fn image(children: Vec<Element>, font: Font) -> Image {
        let canvas = Canvas::new(Point::new(0.1, 0.1), 0.8, 0.8, children);
        let page = Page::new(100.0, 200.0, canvas);
        Image::new(page, TextStyle::new(font, FontScale::new(0.01, 0.02, 0.05)))
    }

    fn render(children: Vec<Element>) -> String {
        SvgRenderer::new()
            .export(&image(children, Font::SansSerif))
            .expect("render should succeed")
    }

    #[test]
    fn test_document_dimensions() {
        let svg = render(vec![]);
        assert!(svg.contains("width=\"100.000mm\""));
        assert!(svg.contains("height=\"200.000mm\""));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_collection_translates_children() {
        let collection = Collection::new(
            Point::new(0.1, 0.1),
            vec![Circle::new(Point::new(0.2, 0.2), 0.05, Paint::solid(Color::Red)).into()],
        );
        let svg = render(vec![collection.into()]);

        // x: 100 * 0.1 + 80 * 0.1 + 80 * 0.2, y: 200 * 0.1 + 160 * 0.1 + 160 * 0.2
        assert!(svg.contains("cx=\"34.000mm\""), "{svg}");
        assert!(svg.contains("cy=\"68.000mm\""), "{svg}");
        // The radius is a vertical extent: 160 * 0.05.
        assert!(svg.contains("r=\"8.000mm\""), "{svg}");
        assert!(svg.contains("fill=\"red\""));
    }

    #[test]
    fn test_text_is_emitted_last() {
        let svg = render(vec![
            Text::new(
                Point::new(0.5, 0.5),
                "Kepler-22",
                TextSize::M,
                TextAnchor::End,
                Paint::new(Color::Blue, Opacity::Full),
            )
            .into(),
            Circle::new(Point::new(0.5, 0.5), 0.01, Paint::default()).into(),
            Rectangle::fill(Paint::new(Color::Yellow, Opacity::XLow)).into(),
        ]);

        let rect = svg.find("<rect").unwrap();
        let circle = svg.find("<circle").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(rect < circle && circle < text, "{svg}");
        assert!(svg.contains("text-anchor=\"end\""));
        // Font size is page height times the scale: 200 * 0.02.
        assert!(svg.contains("font-size=\"4.000mm\""));
        assert!(svg.contains("\nKepler-22\n</text>"), "{svg}");
    }

    #[test]
    fn test_line_attributes() {
        let svg = render(vec![
            Line::horizontal(Point::new(0.0, 0.5), 0.5, 0.01, Paint::new(Color::Blue, Opacity::Low)).into(),
        ]);

        assert!(svg.contains("x1=\"10.000mm\""), "{svg}");
        assert!(svg.contains("x2=\"50.000mm\""), "{svg}");
        assert!(svg.contains("stroke-width=\"1.600mm\""), "{svg}");
        assert!(svg.contains("opacity=\"0.400\""));
    }

    #[test]
    fn test_web_font_import() {
        let svg = SvgRenderer::new()
            .export(&image(vec![], Font::TurretRoad))
            .unwrap();
        assert!(svg.contains("<defs>"));
        assert!(svg.contains("Turret+Road"));
    }

    #[test]
    fn test_background_and_palette() {
        let palette = Palette::from_overrides([(Color::Red, "#aa0000")]).unwrap();
        let renderer = SvgRenderer::new()
            .with_palette(palette)
            .with_background(Some(CssColor::new("white").unwrap()));

        let circle = Circle::new(Point::new(0.5, 0.5), 0.01, Paint::solid(Color::Red));
        let svg = renderer
            .export(&image(vec![circle.into()], Font::SansSerif))
            .unwrap();

        assert!(svg.contains("background-color:"));
        assert!(!svg.contains("fill=\"red\""));
    }

    #[test]
    fn test_non_finite_value_is_an_error() {
        let circle = Circle::new(Point::new(f64::NAN, 0.5), 0.01, Paint::default());
        let err = SvgRenderer::new()
            .export(&image(vec![circle.into()], Font::SansSerif))
            .unwrap_err();

        assert!(matches!(
            err,
            RenderError::Layout(LayoutError::NonFinite { element: "circle", attribute: "cx", .. })
        ));
    }

    #[test]
    fn test_page_size_dimensions() {
        let page = Page::with_size(PageSize::A4, Canvas::full(vec![]));
        let image = Image::new(page, TextStyle::new(Font::Serif, FontScale::new(0.01, 0.02, 0.03)));
        let svg = SvgRenderer::new().export(&image).unwrap();

        assert!(svg.contains("width=\"210.000mm\""));
        assert!(svg.contains("height=\"297.000mm\""));
    }
}
