//! Error types for exoposter operations.
//!
//! [`ExopError`] wraps the errors of every pipeline stage so callers deal
//! with a single type.

use std::io;

use thiserror::Error;

use exoposter_catalog::CatalogError;

use crate::{export::RenderError, selection::SelectionError};

/// The main error type for exoposter operations.
#[derive(Debug, Error)]
pub enum ExopError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),
}
