//! Batch loading of catalog directories.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{
    config::CatalogConfig, document::parse_document, error::CatalogError, model::SolarSystem,
};

const DOCUMENT_EXTENSION: &str = "xml";

/// Result of a batch load.
///
/// Documents that failed are reported in [`skipped`](Self::skipped) rather
/// than aborting the load, unless the loader is configured to fail fast.
#[derive(Debug, Default)]
pub struct CatalogLoad {
    documents: usize,
    systems: Vec<SolarSystem>,
    skipped: Vec<CatalogError>,
}

impl CatalogLoad {
    /// Number of documents visited, including skipped ones.
    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn systems(&self) -> &[SolarSystem] {
        &self.systems
    }

    pub fn skipped(&self) -> &[CatalogError] {
        &self.skipped
    }
}

/// Loads solar systems from a catalog directory tree.
///
/// Holds only configuration; every call reads the disk afresh.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    config: CatalogConfig,
}

impl CatalogLoader {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Loads every document of the primary and supplemental directories.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingDirectory`] if the primary directory
    /// does not exist, an I/O error if a directory cannot be listed, and with
    /// `fail_fast` the first document error.
    pub fn load(&self) -> Result<CatalogLoad, CatalogError> {
        let paths = self.document_paths()?;
        info!(root:? = self.config.root(), documents = paths.len(); "Loading catalog");

        let mut load = CatalogLoad::default();
        for path in paths {
            load.documents += 1;
            match load_document(&path) {
                Ok(systems) => load.systems.extend(systems),
                Err(err) if self.config.fail_fast() => return Err(err),
                Err(err) => {
                    warn!(err:%; "Skipping catalog document");
                    load.skipped.push(err);
                }
            }
        }

        info!(
            systems = load.systems.len(),
            skipped = load.skipped.len();
            "Catalog loaded"
        );
        Ok(load)
    }

    /// Loads the first system of the document with the given identifier.
    ///
    /// The primary directory is searched before the supplemental one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SystemNotFound`] if no document exists or the
    /// document holds no star with planets, or the document's own error.
    pub fn load_system(&self, id: &str) -> Result<SolarSystem, CatalogError> {
        let file_name = format!("{id}.{DOCUMENT_EXTENSION}");
        let path = self
            .config
            .directories()
            .into_iter()
            .map(|dir| dir.join(&file_name))
            .find(|path| path.is_file())
            .ok_or_else(|| CatalogError::SystemNotFound(id.to_string()))?;

        debug!(id, path:?; "Loading single system");
        load_document(&path)?
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::SystemNotFound(id.to_string()))
    }

    /// Loads the configured reference system.
    pub fn load_reference(&self) -> Result<SolarSystem, CatalogError> {
        self.load_system(self.config.reference_system())
    }

    /// Document paths in load order: each directory sorted by path, primary
    /// first. A missing supplemental directory is skipped.
    pub fn document_paths(&self) -> Result<Vec<PathBuf>, CatalogError> {
        let [primary, supplemental] = self.config.directories();
        if !primary.is_dir() {
            return Err(CatalogError::MissingDirectory(primary));
        }

        let mut paths = list_documents(&primary)?;
        if supplemental.is_dir() {
            paths.extend(list_documents(&supplemental)?);
        } else {
            debug!(path:? = supplemental; "Supplemental catalog directory missing");
        }
        Ok(paths)
    }
}

fn list_documents(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let io_error = |source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == DOCUMENT_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Reads and parses one document; the identifier is the file stem.
fn load_document(path: &Path) -> Result<Vec<SolarSystem>, CatalogError> {
    let id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let xml = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&id, &xml)
}
