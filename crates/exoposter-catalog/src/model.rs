//! Domain entities built from catalog documents.
//!
//! All entities are immutable once constructed. Unknown measurements are
//! `None` and stay `None` through every derivation.

use crate::orbit;

/// A planet orbiting a [`Star`].
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    names: Vec<String>,
    system_name: String,
    radius: Option<f64>,
    period: Option<f64>,
    distance: Option<f64>,
}

impl Planet {
    /// Creates a planet, deriving its distance from the period and the
    /// host star's mass.
    ///
    /// # Arguments
    ///
    /// * `names` - Catalog aliases, in document order.
    /// * `system_name` - Proper name of the owning system.
    /// * `radius` - Radius in Jupiter radii.
    /// * `period` - Orbital period in days.
    /// * `host_mass` - Mass of the host star in solar masses.
    pub fn new(
        names: Vec<String>,
        system_name: impl Into<String>,
        radius: Option<f64>,
        period: Option<f64>,
        host_mass: Option<f64>,
    ) -> Self {
        let distance = period
            .zip(host_mass)
            .map(|(period, mass)| orbit::planet_distance(period, mass));
        Self {
            names,
            system_name: system_name.into(),
            radius,
            period,
            distance,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    /// Radius in Jupiter radii.
    pub fn radius(&self) -> Option<f64> {
        self.radius
    }

    /// Orbital period in days.
    pub fn period(&self) -> Option<f64> {
        self.period
    }

    /// Semi-major axis in AU.
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }
}

/// A star with its planets.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    names: Vec<String>,
    radius: Option<f64>,
    mass: Option<f64>,
    planets: Vec<Planet>,
    binary_separation: Option<f64>,
}

impl Star {
    /// # Arguments
    ///
    /// * `radius` - Radius in solar radii.
    /// * `mass` - Mass in solar masses.
    /// * `binary_separation` - Separation in AU of the enclosing binary, if any.
    pub fn new(
        names: Vec<String>,
        radius: Option<f64>,
        mass: Option<f64>,
        planets: Vec<Planet>,
        binary_separation: Option<f64>,
    ) -> Self {
        Self {
            names,
            radius,
            mass,
            planets,
            binary_separation,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn radius(&self) -> Option<f64> {
        self.radius
    }

    pub fn mass(&self) -> Option<f64> {
        self.mass
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn binary_separation(&self) -> Option<f64> {
        self.binary_separation
    }

    /// Largest known planet distance, in AU.
    pub fn max_planet_distance(&self) -> Option<f64> {
        self.planets
            .iter()
            .filter_map(Planet::distance)
            .reduce(f64::max)
    }

    /// Whether any planet has a known radius.
    pub fn has_planet_radius(&self) -> bool {
        self.planets.iter().any(|planet| planet.radius.is_some())
    }
}

/// One star of a catalog document together with the document identifier.
///
/// A binary document yields one system per star, all sharing the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarSystem {
    id: String,
    name: String,
    star: Star,
}

impl SolarSystem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, star: Star) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            star,
        }
    }

    /// Catalog key, the document's file stem.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Proper name of the system.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    /// Whether the star is known as "Sun".
    pub fn is_solar_system(&self) -> bool {
        self.star.names.iter().any(|name| name == "Sun")
    }
}
