//! Serialization of poster scenes.

pub mod svg;

use thiserror::Error;

use exoposter_core::{layout::LayoutError, scene::Image};

/// Errors raised while serializing a scene.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Turns a poster scene into a document.
pub trait Exporter {
    /// Serializes `image` into a complete document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a coordinate cannot be resolved.
    fn export(&self, image: &Image) -> Result<String, RenderError>;
}
