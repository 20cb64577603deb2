//! Error adapter for converting ExopError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use exoposter::{ExopError, catalog::CatalogError};

/// Adapter that reports an [`ExopError`] through miette.
///
/// Each variant gets a diagnostic code. Errors with an obvious fix carry a
/// help line.
pub struct ErrorAdapter<'a>(pub &'a ExopError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ExopError::Io(_) => "exoposter::io",
            ExopError::Catalog(_) => "exoposter::catalog",
            ExopError::Selection(_) => "exoposter::selection",
            ExopError::Render(_) => "exoposter::render",
            ExopError::Config(_) => "exoposter::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ExopError::Catalog(CatalogError::MissingDirectory(_)) => {
                "pass --catalog or set `root` in the [catalog] section of the config file"
            }
            ExopError::Catalog(CatalogError::SystemNotFound(_)) => {
                "the reference system is set with `reference_system` in the [catalog] section"
            }
            ExopError::Catalog(CatalogError::MultipleStars { .. }) => {
                "set `fail_fast = false` in the [catalog] section to skip malformed documents"
            }
            ExopError::Selection(_) => {
                "no system passed the selection, check the [poster] section of the config file"
            }
            ExopError::Config(_) => "see the [style] and [poster] sections of the config file",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error as _, path::PathBuf};

    use exoposter::selection::SelectionError;

    use super::*;

    #[test]
    fn test_codes_per_variant() {
        let err = ExopError::Selection(SelectionError::EmptyBatch);
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "exoposter::selection");
        assert_eq!(adapter.to_string(), err.to_string());
    }

    #[test]
    fn test_missing_catalog_has_help() {
        let err = ExopError::Catalog(CatalogError::MissingDirectory(PathBuf::from("oec/systems")));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "exoposter::catalog");
        assert!(adapter.help().unwrap().to_string().contains("--catalog"));
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = ExopError::Io(std::io::Error::other("disk full"));
        let adapter = ErrorAdapter(&err);

        assert!(adapter.help().is_none());
        assert!(adapter.source().is_some());
    }
}
