//! Display names for stars and planets.
//!
//! Catalog entries carry several aliases per body, most of them survey
//! designations ("HD 209458", "KIC 10593626"). [`NameResolver`] picks the
//! alias best suited for a poster label.

/// Survey and catalog designations that are skipped when a proper name exists.
pub const DEFAULT_CATALOG_PREFIXES: &[&str] = &[
    "1SWASP", "2M", "BD", "CD", "CED", "CPD", "CoRoT", "DMPP", "EPIC", "EWS", "GJ", "GPM", "GSC",
    "Gaia", "Gl", "HAT", "HD", "HIP", "HR", "K2", "KELT", "KIC", "KMT", "KOI", "Kepler", "LHS",
    "LTT", "MASCARA", "MOA", "NGC", "NGTS", "OGLE", "PPM", "PSR", "SAO", "TIC", "TOI", "TYC",
    "UCAC", "UGA", "USNO", "USco", "WASP", "WD", "WISE",
];

/// Picks display names from catalog aliases.
///
/// The prefix list is plain data; membership is a simple `starts_with` test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameResolver {
    prefixes: Vec<String>,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::with_prefixes(DEFAULT_CATALOG_PREFIXES.iter().copied())
    }
}

impl NameResolver {
    /// Creates a resolver with a custom prefix list. Duplicates are dropped.
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for prefix in prefixes {
            let prefix = prefix.into();
            if !unique.contains(&prefix) {
                unique.push(prefix);
            }
        }
        Self { prefixes: unique }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    fn is_catalog_designation(&self, alias: &str) -> bool {
        self.prefixes.iter().any(|prefix| alias.starts_with(prefix.as_str()))
    }

    /// Name of a star.
    ///
    /// A single alias is returned as is. Otherwise the first alias that is not
    /// a catalog designation wins, falling back to the first alias.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exoposter_catalog::names::NameResolver;
    /// let resolver = NameResolver::default();
    /// let aliases = ["HD 209458".to_string(), "Osiris".to_string()];
    /// assert_eq!(resolver.star_name(&aliases), Some("Osiris"));
    /// ```
    pub fn star_name<'a>(&self, aliases: &'a [String]) -> Option<&'a str> {
        if let [only] = aliases {
            return Some(only);
        }
        aliases
            .iter()
            .find(|alias| !self.is_catalog_designation(alias))
            .or_else(|| aliases.first())
            .map(String::as_str)
    }

    /// Name of a planet, relative to its system.
    ///
    /// The first alias is stripped of the system name. A remainder of at most
    /// one character, counted before trimming, means there is no name worth a
    /// label and yields `None`.
    pub fn planet_name<'a>(&self, aliases: &'a [String], system_name: &str) -> Option<&'a str> {
        let first = aliases.first()?;
        match first.strip_prefix(system_name) {
            Some(rest) => (rest.chars().count() > 1).then(|| rest.trim()),
            None => Some(first),
        }
    }
}
