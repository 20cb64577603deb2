//! Error types for catalog loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while reading catalog documents.
///
/// Every document-level variant names the system identifier (the file stem)
/// of the document that failed, so a caller skipping bad documents can still
/// report which ones were dropped.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("system `{system}`: malformed document: {message}")]
    Xml { system: String, message: String },

    #[error("system `{system}`: {count} stars outside a binary grouping")]
    MultipleStars { system: String, count: usize },

    #[error("system `{system}`: `{field}` is not a number: `{value}`")]
    InvalidNumber {
        system: String,
        field: &'static str,
        value: String,
    },

    #[error("system `{system}`: {element} without a name")]
    MissingName {
        system: String,
        element: &'static str,
    },

    #[error("catalog directory not found: `{}`", .0.display())]
    MissingDirectory(PathBuf),

    #[error("system `{0}` not found in catalog")]
    SystemNotFound(String),
}

impl CatalogError {
    /// Identifier of the system the error belongs to, if it is document-level.
    pub fn system(&self) -> Option<&str> {
        match self {
            Self::Xml { system, .. }
            | Self::MultipleStars { system, .. }
            | Self::InvalidNumber { system, .. }
            | Self::MissingName { system, .. } => Some(system),
            Self::SystemNotFound(system) => Some(system),
            Self::Io { .. } | Self::MissingDirectory(_) => None,
        }
    }
}
