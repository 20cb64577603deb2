//! SVG primitives for drawable scene elements.

use svg::node::element as svg_element;

use exoposter_core::{
    layer::SvgNode,
    layout::{CoordinateSpace, ensure_finite},
    scene::{self, Paint, TextAnchor, TextStyle},
};

use super::{SvgRenderer, mm};
use crate::export::RenderError;

fn opacity(value: f64) -> String {
    format!("{value:.3}")
}

impl SvgRenderer {
    /// Applies fill color and opacity, leaving unset values out.
    fn fill<T>(&self, node: T, paint: Paint) -> T
    where
        T: svg::Node,
    {
        let mut node = node;
        if let Some(color) = paint.color() {
            node.assign("fill", self.palette.css(color));
        }
        if let Some(level) = paint.opacity() {
            node.assign("opacity", opacity(level.value()));
        }
        node
    }

    pub(super) fn circle(
        &self,
        circle: &scene::Circle,
        space: &CoordinateSpace,
    ) -> Result<SvgNode, RenderError> {
        let cx = ensure_finite(space.x(circle.origin().x()), "circle", "cx")?;
        let cy = ensure_finite(space.y(circle.origin().y()), "circle", "cy")?;
        let r = ensure_finite(space.height(circle.radius()), "circle", "r")?;

        let node = svg_element::Circle::new()
            .set("cx", mm(cx))
            .set("cy", mm(cy))
            .set("r", mm(r));
        Ok(Box::new(self.fill(node, circle.paint())))
    }

    pub(super) fn rectangle(
        &self,
        rect: &scene::Rectangle,
        space: &CoordinateSpace,
    ) -> Result<SvgNode, RenderError> {
        let x = ensure_finite(space.x(rect.origin().x()), "rectangle", "x")?;
        let y = ensure_finite(space.y(rect.origin().y()), "rectangle", "y")?;
        let width = ensure_finite(space.width(rect.width()), "rectangle", "width")?;
        let height = ensure_finite(space.height(rect.height()), "rectangle", "height")?;

        let node = svg_element::Rectangle::new()
            .set("x", mm(x))
            .set("y", mm(y))
            .set("width", mm(width))
            .set("height", mm(height));
        Ok(Box::new(self.fill(node, rect.paint())))
    }

    pub(super) fn line(
        &self,
        line: &scene::Line,
        space: &CoordinateSpace,
    ) -> Result<SvgNode, RenderError> {
        let start = space.point(line.origin());
        let end = space.point(line.end());
        let x1 = ensure_finite(start.x(), "line", "x1")?;
        let y1 = ensure_finite(start.y(), "line", "y1")?;
        let x2 = ensure_finite(end.x(), "line", "x2")?;
        let y2 = ensure_finite(end.y(), "line", "y2")?;
        let stroke_width = ensure_finite(space.height(line.stroke_width()), "line", "stroke-width")?;

        let mut node = svg_element::Line::new()
            .set("x1", mm(x1))
            .set("y1", mm(y1))
            .set("x2", mm(x2))
            .set("y2", mm(y2))
            .set("stroke-width", mm(stroke_width));

        let paint = line.paint();
        if let Some(color) = paint.color() {
            node = node.set("stroke", self.palette.css(color));
        }
        if let Some(level) = paint.opacity() {
            node = node.set("opacity", opacity(level.value()));
        }
        Ok(Box::new(node))
    }

    pub(super) fn text(
        &self,
        text: &scene::Text,
        space: &CoordinateSpace,
        style: &TextStyle,
    ) -> Result<SvgNode, RenderError> {
        let x = ensure_finite(space.x(text.origin().x()), "text", "x")?;
        let y = ensure_finite(space.y(text.origin().y()), "text", "y")?;
        let font_size = ensure_finite(
            style.font_size_mm(text.size(), space.page_height()),
            "text",
            "font-size",
        )?;

        let mut node = svg_element::Text::new(text.content())
            .set("x", mm(x))
            .set("y", mm(y))
            .set("font-family", style.font().family())
            .set("font-size", mm(font_size));
        if text.anchor() == TextAnchor::End {
            node = node.set("text-anchor", "end");
        }
        Ok(Box::new(self.fill(node, text.paint())))
    }
}
