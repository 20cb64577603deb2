//! Catalog location and load policy.

use std::path::{Path, PathBuf};

use serde::Deserialize;

fn default_root() -> PathBuf {
    PathBuf::from("open_exoplanet_catalogue")
}

fn default_primary() -> String {
    "systems".to_string()
}

fn default_supplemental() -> String {
    "systems_kepler".to_string()
}

fn default_reference_system() -> String {
    "Sun".to_string()
}

/// Where the catalog lives and how load failures are handled.
///
/// Deserializes from the `[catalog]` section of the application
/// configuration. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Catalog root directory.
    #[serde(default = "default_root")]
    root: PathBuf,

    /// Primary document directory, relative to the root.
    #[serde(default = "default_primary")]
    primary: String,

    /// Supplemental document directory, relative to the root.
    #[serde(default = "default_supplemental")]
    supplemental: String,

    /// Identifier of the reference system.
    #[serde(default = "default_reference_system")]
    reference_system: String,

    /// Abort the whole load on the first bad document.
    #[serde(default)]
    fail_fast: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            primary: default_primary(),
            supplemental: default_supplemental(),
            reference_system: default_reference_system(),
            fail_fast: false,
        }
    }
}

impl CatalogConfig {
    /// Creates a configuration for the catalog at `root` with default
    /// directory names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_reference_system(mut self, id: impl Into<String>) -> Self {
        self.reference_system = id.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Document directories in load order: primary, then supplemental.
    pub fn directories(&self) -> [PathBuf; 2] {
        [
            self.root.join(&self.primary),
            self.root.join(&self.supplemental),
        ]
    }

    pub fn reference_system(&self) -> &str {
        &self.reference_system
    }

    pub fn fail_fast(&self) -> bool {
        self.fail_fast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directories() {
        let config = CatalogConfig::new("/data/oec");
        let [primary, supplemental] = config.directories();

        assert_eq!(primary, PathBuf::from("/data/oec/systems"));
        assert_eq!(supplemental, PathBuf::from("/data/oec/systems_kepler"));
        assert_eq!(config.reference_system(), "Sun");
        assert!(!config.fail_fast());
    }

    #[test]
    fn test_builder_methods() {
        let config = CatalogConfig::default()
            .with_root("cat")
            .with_fail_fast(true)
            .with_reference_system("Earth");

        assert_eq!(config.root(), Path::new("cat"));
        assert!(config.fail_fast());
        assert_eq!(config.reference_system(), "Earth");
    }
}
