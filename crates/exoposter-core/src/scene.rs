//! Declarative scene graph for posters.
//!
//! A scene is an immutable tree of [`Element`]s built once per poster. Every
//! coordinate and extent stored on an element is relative to the nearest
//! enclosing [`Canvas`]: `(0, 0)` is the canvas' top-left corner and `(1, 1)`
//! its bottom-right corner. A [`Collection`] groups children and translates
//! them by its own origin without changing the scale. Absolute positions are
//! only known after walking the ancestor chain from the [`Page`], see
//! [`crate::layout`].
//!
//! # Example
//!
//! ```
//! # use exoposter_core::scene::{Canvas, Circle, Element, Paint, Point, Color, Opacity};
//! let marker = Circle::new(Point::new(0.5, 0.5), 0.01, Paint::new(Color::Red, Opacity::Medium));
//! let canvas = Canvas::new(Point::new(0.1, 0.1), 0.8, 0.8, vec![Element::from(marker)]);
//! assert_eq!(canvas.children().len(), 1);
//! ```

mod page;
mod style;

pub use page::{Image, Page, PageSize};
pub use style::{Color, Font, FontScale, Opacity, TextAnchor, TextSize, TextStyle};

/// A position relative to the nearest enclosing canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }
}

/// Optional color and opacity of a drawable element.
///
/// Missing values leave the corresponding SVG attribute unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Paint {
    color: Option<Color>,
    opacity: Option<Opacity>,
}

impl Paint {
    pub fn new(color: Color, opacity: Opacity) -> Self {
        Self {
            color: Some(color),
            opacity: Some(opacity),
        }
    }

    /// Paint with a color and no explicit opacity.
    pub fn solid(color: Color) -> Self {
        Self {
            color: Some(color),
            opacity: None,
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn opacity(&self) -> Option<Opacity> {
        self.opacity
    }
}

/// A filled circle centered at its origin.
///
/// The radius is an extent on the vertical axis of the enclosing canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    origin: Point,
    radius: f64,
    paint: Paint,
}

impl Circle {
    pub fn new(origin: Point, radius: f64, paint: Paint) -> Self {
        Self {
            origin,
            radius,
            paint,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn paint(&self) -> Paint {
        self.paint
    }
}

/// A filled rectangle with its top-left corner at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    origin: Point,
    width: f64,
    height: f64,
    paint: Paint,
}

impl Rectangle {
    pub fn new(origin: Point, width: f64, height: f64, paint: Paint) -> Self {
        Self {
            origin,
            width,
            height,
            paint,
        }
    }

    /// A rectangle covering the whole enclosing canvas.
    pub fn fill(paint: Paint) -> Self {
        Self::new(Point::default(), 1.0, 1.0, paint)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn paint(&self) -> Paint {
        self.paint
    }
}

/// A straight line from the origin to the end point.
///
/// Both points are relative to the same enclosing canvas. The stroke width
/// is an extent on the vertical axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    origin: Point,
    end: Point,
    stroke_width: f64,
    paint: Paint,
}

impl Line {
    pub fn new(origin: Point, end: Point, stroke_width: f64, paint: Paint) -> Self {
        Self {
            origin,
            end,
            stroke_width,
            paint,
        }
    }

    /// A horizontal line starting at the origin.
    pub fn horizontal(origin: Point, length: f64, stroke_width: f64, paint: Paint) -> Self {
        let end = Point::new(origin.x() + length, origin.y());
        Self::new(origin, end, stroke_width, paint)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn paint(&self) -> Paint {
        self.paint
    }
}

/// A single line of text whose baseline is anchored at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    origin: Point,
    content: String,
    size: TextSize,
    anchor: TextAnchor,
    paint: Paint,
}

impl Text {
    pub fn new(
        origin: Point,
        content: impl Into<String>,
        size: TextSize,
        anchor: TextAnchor,
        paint: Paint,
    ) -> Self {
        Self {
            origin,
            content: content.into(),
            size,
            anchor,
            paint,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size(&self) -> TextSize {
        self.size
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn paint(&self) -> Paint {
        self.paint
    }
}

/// An ordered group of elements translated by the collection's origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    origin: Point,
    children: Vec<Element>,
}

impl Collection {
    pub fn new(origin: Point, children: Vec<Element>) -> Self {
        Self { origin, children }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// A collection that opens a new coordinate subspace.
///
/// `width` and `height` are fractions of the parent's space; children address
/// the canvas in `[0, 1]` coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    origin: Point,
    width: f64,
    height: f64,
    children: Vec<Element>,
}

impl Canvas {
    pub fn new(origin: Point, width: f64, height: f64, children: Vec<Element>) -> Self {
        Self {
            origin,
            width,
            height,
            children,
        }
    }

    /// A canvas covering its parent completely.
    pub fn full(children: Vec<Element>) -> Self {
        Self::new(Point::default(), 1.0, 1.0, children)
    }

    /// A canvas inset from its parent's edges by the given fractions.
    pub fn bordered(
        children: Vec<Element>,
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
    ) -> Self {
        Self::new(
            Point::new(left, top),
            1.0 - left - right,
            1.0 - top - bottom,
            children,
        )
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// Any node of the scene tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle(Circle),
    Rectangle(Rectangle),
    Line(Line),
    Text(Text),
    Collection(Collection),
    Canvas(Canvas),
}

impl Element {
    pub fn origin(&self) -> Point {
        match self {
            Self::Circle(circle) => circle.origin(),
            Self::Rectangle(rect) => rect.origin(),
            Self::Line(line) => line.origin(),
            Self::Text(text) => text.origin(),
            Self::Collection(collection) => collection.origin(),
            Self::Canvas(canvas) => canvas.origin(),
        }
    }

    /// Short name of the element kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Rectangle(_) => "rectangle",
            Self::Line(_) => "line",
            Self::Text(_) => "text",
            Self::Collection(_) => "collection",
            Self::Canvas(_) => "canvas",
        }
    }

    /// Number of drawable leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Collection(collection) => {
                collection.children().iter().map(Element::leaf_count).sum()
            }
            Self::Canvas(canvas) => canvas.children().iter().map(Element::leaf_count).sum(),
            _ => 1,
        }
    }
}

impl From<Circle> for Element {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Rectangle> for Element {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Line> for Element {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Collection> for Element {
    fn from(collection: Collection) -> Self {
        Self::Collection(collection)
    }
}

impl From<Canvas> for Element {
    fn from(canvas: Canvas) -> Self {
        Self::Canvas(canvas)
    }
}
