//! Resolution of relative scene coordinates into physical page coordinates.
//!
//! Every element stores coordinates relative to its nearest enclosing canvas.
//! To draw it, the chain of ancestors from the page down to the element's
//! parent is folded into an absolute position in millimeters:
//!
//! ```text
//!   S0 = page width (or height)
//!   Sk = S0 * s1 * ... * sk                  (si = relative canvas size)
//!   absolute = S0*o1 + S1*o2 + ... + S(N-1)*oN + SN*r
//!   extent   = SN*r
//! ```
//!
//! A [`Canvas`] contributes its relative width/height as `si`; a plain
//! [`Collection`] contributes `1.0` and therefore only translates its
//! children. With no ancestors at all the local value is returned unchanged.
//!
//! # Example
//!
//! ```
//! # use exoposter_core::layout::{abs_distance, abs_extent};
//! // A canvas at x = 0.1 spanning half of a 200 mm wide page.
//! assert_eq!(abs_distance(200.0, &[0.5], &[0.1], 0.5), 70.0);
//! assert_eq!(abs_extent(200.0, &[0.5], &[0.1], 0.5), 50.0);
//! ```

use thiserror::Error;

use crate::scene::{Canvas, Collection, Page, Point};

/// Errors raised while resolving scene coordinates.
///
/// These indicate a defect in the code that built the scene, not bad input data.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("{element} resolved to a non-finite {attribute} ({value})")]
    NonFinite {
        element: &'static str,
        attribute: &'static str,
        value: f64,
    },
}

/// Absolute distance from the page's zero point along one axis.
///
/// `sizes` and `offsets` describe the enclosing canvases from the root down
/// to the immediate parent and must have the same length.
///
/// Lengths are only checked in debug builds.
pub fn abs_distance(base: f64, sizes: &[f64], offsets: &[f64], local: f64) -> f64 {
    debug_assert_eq!(
        sizes.len(),
        offsets.len(),
        "every enclosing canvas needs both a size and an offset"
    );
    if sizes.is_empty() {
        return local;
    }

    let (translation, scale) = sizes
        .iter()
        .zip(offsets)
        .fold((0.0, base), |(translation, scale), (size, offset)| {
            (translation + scale * offset, scale * size)
        });
    translation + scale * local
}

/// Absolute extent (width or height) along one axis.
///
/// Offsets do not influence extents; they are accepted so callers can pass the
/// same ancestor description as for [`abs_distance`].
///
/// Lengths are only checked in debug builds.
pub fn abs_extent(base: f64, sizes: &[f64], offsets: &[f64], local: f64) -> f64 {
    debug_assert_eq!(
        sizes.len(),
        offsets.len(),
        "every enclosing canvas needs both a size and an offset"
    );
    if sizes.is_empty() {
        return local;
    }

    base * sizes.iter().product::<f64>() * local
}

/// A resolved point on the page, in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PagePoint {
    x: f64,
    y: f64,
}

impl PagePoint {
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

/// One enclosing group in the ancestor chain of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ancestor {
    origin: Point,
    width: f64,
    height: f64,
}

impl Ancestor {
    /// A canvas rescales its children.
    pub fn canvas(canvas: &Canvas) -> Self {
        Self {
            origin: canvas.origin(),
            width: canvas.width(),
            height: canvas.height(),
        }
    }

    /// A plain collection only translates its children.
    pub fn collection(collection: &Collection) -> Self {
        Self {
            origin: collection.origin(),
            width: 1.0,
            height: 1.0,
        }
    }
}

/// The coordinate space of an element: the page plus all enclosing groups.
///
/// Spaces are immutable; entering a group yields a new, deeper space.
///
/// ```
/// # use exoposter_core::layout::CoordinateSpace;
/// # use exoposter_core::scene::{Canvas, Point};
/// let page = CoordinateSpace::new(100.0, 200.0);
/// let inner = page.enter_canvas(&Canvas::new(Point::new(0.1, 0.1), 0.8, 0.8, Vec::new()));
///
/// let p = inner.point(Point::new(0.5, 0.5));
/// assert_eq!(p.x(), 50.0);
/// assert_eq!(p.y(), 100.0);
/// assert_eq!(inner.height(0.5), 80.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSpace {
    page_width: f64,
    page_height: f64,
    ancestors: Vec<Ancestor>,
}

impl CoordinateSpace {
    /// The root space of a page with the given physical size.
    pub fn new(page_width: f64, page_height: f64) -> Self {
        Self {
            page_width,
            page_height,
            ancestors: Vec::new(),
        }
    }

    pub fn for_page(page: &Page) -> Self {
        Self::new(page.width_mm(), page.height_mm())
    }

    /// Returns the space seen by the children of `canvas`.
    pub fn enter_canvas(&self, canvas: &Canvas) -> Self {
        self.enter(Ancestor::canvas(canvas))
    }

    /// Returns the space seen by the children of `collection`.
    pub fn enter_collection(&self, collection: &Collection) -> Self {
        self.enter(Ancestor::collection(collection))
    }

    fn enter(&self, ancestor: Ancestor) -> Self {
        let mut ancestors = Vec::with_capacity(self.ancestors.len() + 1);
        ancestors.extend_from_slice(&self.ancestors);
        ancestors.push(ancestor);
        Self {
            page_width: self.page_width,
            page_height: self.page_height,
            ancestors,
        }
    }

    /// Number of enclosing groups.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Absolute x coordinate of a relative x coordinate.
    pub fn x(&self, x: f64) -> f64 {
        let (sizes, offsets) = self.horizontal_chain();
        abs_distance(self.page_width, &sizes, &offsets, x)
    }

    /// Absolute y coordinate of a relative y coordinate.
    pub fn y(&self, y: f64) -> f64 {
        let (sizes, offsets) = self.vertical_chain();
        abs_distance(self.page_height, &sizes, &offsets, y)
    }

    /// Absolute position of a relative point.
    pub fn point(&self, point: Point) -> PagePoint {
        PagePoint::new(self.x(point.x()), self.y(point.y()))
    }

    /// Absolute horizontal extent of a relative width.
    pub fn width(&self, width: f64) -> f64 {
        let (sizes, offsets) = self.horizontal_chain();
        abs_extent(self.page_width, &sizes, &offsets, width)
    }

    /// Absolute vertical extent of a relative height.
    pub fn height(&self, height: f64) -> f64 {
        let (sizes, offsets) = self.vertical_chain();
        abs_extent(self.page_height, &sizes, &offsets, height)
    }

    fn horizontal_chain(&self) -> (Vec<f64>, Vec<f64>) {
        self.ancestors
            .iter()
            .map(|ancestor| (ancestor.width, ancestor.origin.x()))
            .unzip()
    }

    fn vertical_chain(&self) -> (Vec<f64>, Vec<f64>) {
        self.ancestors
            .iter()
            .map(|ancestor| (ancestor.height, ancestor.origin.y()))
            .unzip()
    }
}

/// Checks that a resolved value can be written to the output document.
///
/// # Errors
///
/// Returns [`LayoutError::NonFinite`] for `NaN` and infinite values.
pub fn ensure_finite(
    value: f64,
    element: &'static str,
    attribute: &'static str,
) -> Result<f64, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::NonFinite {
            element,
            attribute,
            value,
        })
    }
}
