//! Orbital distance derived from Kepler's third law.

use std::f64::consts::PI;

/// Gravitational constant in m³ kg⁻¹ s⁻².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.667408e-11;

/// Astronomical unit in meters.
pub const ASTRONOMICAL_UNIT: f64 = 1.49597870e11;

/// Solar mass in kilograms.
pub const SOLAR_MASS: f64 = 1.989e30;

/// Number of seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Semi-major axis of the Earth's orbit, in AU.
pub const EARTH_DISTANCE: f64 = 1.0;

/// Semi-major axis in AU of two bodies orbiting each other.
///
/// `a = ∛(G (m1 + m2) T² / 4π²)`
///
/// # Arguments
///
/// * `period` - Orbital period in seconds.
/// * `mass1`, `mass2` - Masses of the two bodies in kilograms.
///
/// # Examples
///
/// ```
/// # use exoposter_catalog::orbit::{semi_major_axis, SECONDS_PER_DAY, SOLAR_MASS};
/// let earth = semi_major_axis(365.256363004 * SECONDS_PER_DAY, 0.0, SOLAR_MASS);
/// assert!((earth - 1.0).abs() < 0.01);
/// ```
pub fn semi_major_axis(period: f64, mass1: f64, mass2: f64) -> f64 {
    let meters = (GRAVITATIONAL_CONSTANT * (mass1 + mass2) * period * period / (4.0 * PI * PI)).cbrt();
    meters / ASTRONOMICAL_UNIT
}

/// Distance in AU of a planet with the given period (days) around a star of
/// the given mass (solar masses). The planet's own mass is neglected.
pub fn planet_distance(period_days: f64, star_mass_solar: f64) -> f64 {
    semi_major_axis(period_days * SECONDS_PER_DAY, 0.0, star_mass_solar * SOLAR_MASS)
}
