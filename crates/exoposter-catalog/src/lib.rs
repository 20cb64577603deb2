//! Exoposter Catalog
//!
//! Reads Open Exoplanet Catalogue documents into immutable
//! [`SolarSystem`](model::SolarSystem) records. Planet distances are derived
//! at load time from the orbital period and the host star's mass
//! ([`orbit`]); display names are chosen from catalog aliases by
//! [`NameResolver`](names::NameResolver).
//!
//! # Example
//!
//! ```rust,no_run
//! use exoposter_catalog::{CatalogConfig, CatalogLoader};
//!
//! let loader = CatalogLoader::new(CatalogConfig::new("open_exoplanet_catalogue"));
//! let load = loader.load().expect("catalog");
//! println!("{} systems, {} skipped", load.systems().len(), load.skipped().len());
//! ```

pub mod model;
pub mod names;
pub mod orbit;
pub mod statistics;

mod config;
mod document;
mod error;
mod loader;

pub use config::CatalogConfig;
pub use document::parse_document;
pub use error::CatalogError;
pub use loader::{CatalogLoad, CatalogLoader};
