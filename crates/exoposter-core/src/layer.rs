//! Layer-based z-ordering for SVG output.
//!
//! Rendered primitives are collected together with the [`RenderLayer`] they
//! belong to. When the output is finalised, primitives are grouped per layer
//! and emitted bottom to top, so text always ends up above every shape
//! regardless of where it sits in the scene tree.
//!
//! # Example
//!
//! ```
//! # use exoposter_core::layer::{LayeredOutput, RenderLayer};
//! # use svg::node::element::{Circle, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("label")));
//! output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
//!
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Page fills.
    Background,
    /// Markers and lines.
    Content,
    /// Labels, titles and legends.
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Content => "content",
            Self::Text => "text",
        }
    }
}

/// SVG nodes tagged with their rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the given layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes on the given layer.
    pub fn count(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. The sort
    /// is stable, so nodes keep their insertion order within a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Rectangle, Text};

    use super::*;

    #[test]
    fn test_layered_output_new_is_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_counts_per_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Text::new("a")));

        assert_eq!(output.count(RenderLayer::Content), 2);
        assert_eq!(output.count(RenderLayer::Text), 1);
        assert_eq!(output.count(RenderLayer::Background), 0);
    }

    #[test]
    fn test_text_layer_renders_last() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Text::new("label")));
        output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains("data-layer=\"background\""));
        assert!(rendered[1].contains("data-layer=\"content\""));
        assert!(rendered[2].contains("data-layer=\"text\""));
    }

    #[test]
    fn test_same_layer_yields_one_group() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        assert_eq!(output.count(RenderLayer::Content), 2);
        assert_eq!(output.render().len(), 1);
    }
}
