//! Summary figures for a loaded catalog.

use std::fmt::{self, Write as _};

use crate::{loader::CatalogLoad, model::SolarSystem};

/// Binaries closer than this (AU) are listed individually.
pub const DEFAULT_SEPARATION_THRESHOLD: f64 = 100.0;

/// One row of the close-binary table.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryEntry {
    pub name: String,
    pub separation: f64,
    pub planets: usize,
    /// Largest known planet distance, in AU.
    pub extent: Option<f64>,
}

/// Counts over a loaded catalog plus the table of close binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStatistics {
    pub documents: usize,
    pub systems: usize,
    pub systems_with_planets: usize,
    pub systems_in_binary: usize,
    pub planets: usize,
    pub separation_threshold: f64,
    /// Binaries below the threshold, by ascending separation.
    pub close_binaries: Vec<BinaryEntry>,
}

impl CatalogStatistics {
    pub fn from_load(load: &CatalogLoad, separation_threshold: f64) -> Self {
        Self::from_systems(load.documents(), load.systems(), separation_threshold)
    }

    pub fn from_systems(documents: usize, systems: &[SolarSystem], separation_threshold: f64) -> Self {
        let with_planets: Vec<&SolarSystem> = systems
            .iter()
            .filter(|system| !system.star().planets().is_empty())
            .collect();

        let in_binary: Vec<&SolarSystem> = with_planets
            .iter()
            .copied()
            .filter(|system| system.star().binary_separation().is_some())
            .collect();

        let mut close_binaries: Vec<BinaryEntry> = in_binary
            .iter()
            .filter_map(|system| {
                let separation = system.star().binary_separation()?;
                (separation < separation_threshold).then(|| BinaryEntry {
                    name: system.name().to_string(),
                    separation,
                    planets: system.star().planets().len(),
                    extent: system.star().max_planet_distance(),
                })
            })
            .collect();
        close_binaries.sort_by(|a, b| a.separation.total_cmp(&b.separation));

        Self {
            documents,
            systems: systems.len(),
            systems_with_planets: with_planets.len(),
            systems_in_binary: in_binary.len(),
            planets: systems.iter().map(|s| s.star().planets().len()).sum(),
            separation_threshold,
            close_binaries,
        }
    }

    /// Renders the statistics as a Markdown report.
    pub fn to_markdown(&self, title_date: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_markdown(&mut out, title_date);
        out
    }

    fn write_markdown(&self, out: &mut String, title_date: &str) -> fmt::Result {
        writeln!(out, "## Statistics {title_date}")?;
        writeln!(out, "### Summaries")?;
        writeln!(out, "* {} data files", self.documents)?;
        writeln!(out, "* {} systems with one star", self.systems)?;
        writeln!(out, "* {} systems with at least one planet", self.systems_with_planets)?;
        writeln!(
            out,
            "* {} systems with a binary partner and at least one planet",
            self.systems_in_binary
        )?;
        writeln!(out, "* {} planets", self.planets)?;
        writeln!(out, "### Systems with a binary partner and at least one planet")?;
        writeln!(out, "Separation of binaries < {} AU", self.separation_threshold)?;
        writeln!(out)?;
        writeln!(out, "|Number|Name|Separation[AU]|Planet count|System size[AU]|")?;
        writeln!(out, "|----|----|----|----|----|")?;
        for (index, entry) in self.close_binaries.iter().enumerate() {
            let extent = entry
                .extent
                .map(|extent| format!("{extent:.8}"))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                "|{index:5} | {:>25} | {:9.1} | {:4} | {extent}|",
                entry.name, entry.separation, entry.planets
            )?;
        }
        Ok(())
    }
}
