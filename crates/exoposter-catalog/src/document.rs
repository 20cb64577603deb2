//! Open Exoplanet Catalogue documents.
//!
//! The serde structures below mirror the subset of the catalogue schema the
//! poster needs. Everything else in a document (error bars, discovery data,
//! units on other fields) is ignored by the deserializer.

use log::trace;
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::{
    error::CatalogError,
    model::{Planet, SolarSystem, Star},
};

#[derive(Debug, Default, Deserialize)]
struct SystemDoc {
    #[serde(rename = "name", default)]
    names: Vec<String>,
    #[serde(rename = "star", default)]
    stars: Vec<StarDoc>,
    #[serde(rename = "binary", default)]
    binaries: Vec<BinaryDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct BinaryDoc {
    #[serde(rename = "separation", default)]
    separations: Vec<Measurement>,
    #[serde(rename = "star", default)]
    stars: Vec<StarDoc>,
    #[serde(rename = "binary", default)]
    binaries: Vec<BinaryDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct StarDoc {
    #[serde(rename = "name", default)]
    names: Vec<String>,
    #[serde(default)]
    radius: Option<Measurement>,
    #[serde(default)]
    mass: Option<Measurement>,
    #[serde(rename = "planet", default)]
    planets: Vec<PlanetDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct PlanetDoc {
    #[serde(rename = "name", default)]
    names: Vec<String>,
    #[serde(default)]
    radius: Option<Measurement>,
    #[serde(default)]
    period: Option<Measurement>,
}

/// A numeric element such as `<radius errorminus="0.1">1.2</radius>`.
#[derive(Debug, Default, Deserialize)]
struct Measurement {
    #[serde(rename = "@unit", default)]
    unit: Option<String>,
    #[serde(rename = "$text", default)]
    text: Option<String>,
}

impl Measurement {
    /// Parses the element text. Missing or blank text is an unknown value.
    fn value(&self, system: &str, field: &'static str) -> Result<Option<f64>, CatalogError> {
        let Some(text) = self.text.as_deref().map(str::trim) else {
            return Ok(None);
        };
        if text.is_empty() {
            return Ok(None);
        }
        text.parse::<f64>()
            .map(Some)
            .map_err(|_| CatalogError::InvalidNumber {
                system: system.to_string(),
                field,
                value: text.to_string(),
            })
    }
}

fn optional_value(
    measurement: Option<&Measurement>,
    system: &str,
    field: &'static str,
) -> Result<Option<f64>, CatalogError> {
    match measurement {
        Some(measurement) => measurement.value(system, field),
        None => Ok(None),
    }
}

fn trimmed_names(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Parses one catalog document into solar systems.
///
/// `id` is the system identifier used for every produced system and in every
/// error. Each star with at least one planet becomes one [`SolarSystem`];
/// stars inside binary groupings inherit the separation of the nearest
/// enclosing binary.
///
/// # Errors
///
/// * [`CatalogError::Xml`] if the document is not well formed.
/// * [`CatalogError::MultipleStars`] if more than one star sits directly
///   below the root.
/// * [`CatalogError::InvalidNumber`] if a numeric element holds text that is
///   not a number.
/// * [`CatalogError::MissingName`] if a planet has no name.
pub fn parse_document(id: &str, xml: &str) -> Result<Vec<SolarSystem>, CatalogError> {
    let doc: SystemDoc = from_str(xml).map_err(|err| CatalogError::Xml {
        system: id.to_string(),
        message: err.to_string(),
    })?;

    if doc.stars.len() > 1 {
        return Err(CatalogError::MultipleStars {
            system: id.to_string(),
            count: doc.stars.len(),
        });
    }

    let system_name = trimmed_names(doc.names)
        .into_iter()
        .next()
        .unwrap_or_else(|| id.to_string());

    let mut stars = Vec::new();
    for star in doc.stars {
        stars.push(convert_star(id, &system_name, star, None)?);
    }
    for binary in doc.binaries {
        collect_binary(id, &system_name, binary, None, &mut stars)?;
    }

    let systems = stars
        .into_iter()
        .filter(|star| {
            let keep = !star.planets().is_empty();
            if !keep {
                trace!(system = id; "Dropping star without planets");
            }
            keep
        })
        .map(|star| SolarSystem::new(id, system_name.as_str(), star))
        .collect();

    Ok(systems)
}

/// Collects the stars of a binary grouping, recursing into nested binaries.
///
/// A binary without a usable separation passes on the one it inherited.
fn collect_binary(
    id: &str,
    system_name: &str,
    binary: BinaryDoc,
    inherited: Option<f64>,
    stars: &mut Vec<Star>,
) -> Result<(), CatalogError> {
    let separation = binary_separation(id, &binary.separations)?.or(inherited);
    for star in binary.stars {
        stars.push(convert_star(id, system_name, star, separation)?);
    }
    for nested in binary.binaries {
        collect_binary(id, system_name, nested, separation, stars)?;
    }
    Ok(())
}

/// Separation in AU: the measurement with `unit="AU"`, else the first one
/// without a unit.
fn binary_separation(id: &str, separations: &[Measurement]) -> Result<Option<f64>, CatalogError> {
    let chosen = separations
        .iter()
        .find(|m| m.unit.as_deref() == Some("AU"))
        .or_else(|| separations.iter().find(|m| m.unit.is_none()));
    optional_value(chosen, id, "separation")
}

fn convert_star(
    id: &str,
    system_name: &str,
    star: StarDoc,
    binary_separation: Option<f64>,
) -> Result<Star, CatalogError> {
    let radius = optional_value(star.radius.as_ref(), id, "star radius")?;
    let mass = optional_value(star.mass.as_ref(), id, "star mass")?;

    let mut planets = Vec::with_capacity(star.planets.len());
    for planet in star.planets {
        let names = trimmed_names(planet.names);
        if names.is_empty() {
            return Err(CatalogError::MissingName {
                system: id.to_string(),
                element: "planet",
            });
        }
        let planet_radius = optional_value(planet.radius.as_ref(), id, "planet radius")?;
        let period = optional_value(planet.period.as_ref(), id, "planet period")?;
        planets.push(Planet::new(names, system_name, planet_radius, period, mass));
    }

    Ok(Star::new(
        trimmed_names(star.names),
        radius,
        mass,
        planets,
        binary_separation,
    ))
}
