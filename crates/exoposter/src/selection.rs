//! Choosing and ordering the systems that appear on a poster.
//!
//! Both rankings are pure functions over the loaded systems and a reference
//! system. Sorting is stable and every key ties back to the system
//! identifier, so the same input always yields the same order.

use std::cmp::Ordering;

use thiserror::Error;

use exoposter_catalog::model::SolarSystem;

/// Star radius, in solar radii, assumed when the catalog has none.
pub const DEFAULT_STAR_RADIUS: f64 = 1.0;

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("cannot scale an empty batch of systems")]
    EmptyBatch,
}

/// A candidate together with its ranking key.
struct Ranked<'a> {
    key: f64,
    system: &'a SolarSystem,
}

fn by_key_then_id(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    a.key
        .total_cmp(&b.key)
        .then_with(|| a.system.id().cmp(b.system.id()))
}

/// Signed difference between the target distance and the planet closest to it.
fn closest_delta(system: &SolarSystem, target: f64) -> Option<f64> {
    system
        .star()
        .planets()
        .iter()
        .filter_map(|planet| planet.distance())
        .map(|distance| distance - target)
        .fold(None, |closest: Option<f64>, delta| match closest {
            Some(best) if best.abs() <= delta.abs() => Some(best),
            _ => Some(delta),
        })
}

/// Ranks systems by how close one of their planets orbits to `target` AU.
///
/// Up to `count / 2` systems come from each side of the target. The result
/// runs from the farthest-inward candidate through `reference` to the
/// farthest-outward candidate. Systems without any derived planet distance
/// and systems sharing the reference identifier are skipped.
///
/// # Examples
///
/// ```
/// # use exoposter::selection::rank_nearest;
/// # use exoposter_catalog::model::{Planet, SolarSystem, Star};
/// let system = |id: &str, period: f64| {
///     let planet = Planet::new(vec![format!("{id} b")], id, None, Some(period), Some(1.0));
///     SolarSystem::new(id, id, Star::new(vec![], None, Some(1.0), vec![planet], None))
/// };
/// let sun = system("Sun", 365.25);
/// let candidates = [system("inner", 300.0), system("outer", 400.0)];
///
/// let ranked = rank_nearest(&candidates, &sun, 2, 1.0);
/// let ids: Vec<&str> = ranked.iter().map(|s| s.id()).collect();
/// assert_eq!(ids, ["inner", "Sun", "outer"]);
/// ```
pub fn rank_nearest<'a>(
    candidates: &'a [SolarSystem],
    reference: &'a SolarSystem,
    count: usize,
    target: f64,
) -> Vec<&'a SolarSystem> {
    let (mut closer, mut farther): (Vec<Ranked<'a>>, Vec<Ranked<'a>>) = candidates
        .iter()
        .filter(|system| system.id() != reference.id())
        .filter_map(|system| {
            closest_delta(system, target).map(|key| Ranked { key, system })
        })
        .partition(|ranked| ranked.key < 0.0);

    // Smallest magnitude first on both sides.
    closer.sort_by(|a, b| {
        b.key
            .total_cmp(&a.key)
            .then_with(|| a.system.id().cmp(b.system.id()))
    });
    farther.sort_by(by_key_then_id);

    let half = count / 2;
    let mut ranked: Vec<&SolarSystem> = closer
        .into_iter()
        .take(half)
        .map(|ranked| ranked.system)
        .collect();
    ranked.reverse();
    ranked.push(reference);
    ranked.extend(farther.into_iter().take(half).map(|ranked| ranked.system));
    ranked
}

/// Ranks systems by their largest known planet distance.
///
/// Keeps systems whose extent is at most `ceiling` AU and that have at least
/// one planet of known radius, takes the `count` largest, and returns them
/// from smallest to largest extent with `reference` last.
pub fn rank_max_extent<'a>(
    candidates: &'a [SolarSystem],
    reference: &'a SolarSystem,
    count: usize,
    ceiling: f64,
) -> Vec<&'a SolarSystem> {
    let mut extents: Vec<Ranked<'a>> = candidates
        .iter()
        .filter(|system| system.id() != reference.id())
        .filter(|system| system.star().has_planet_radius())
        .filter_map(|system| {
            system
                .star()
                .max_planet_distance()
                .filter(|extent| *extent <= ceiling)
                .map(|key| Ranked { key, system })
        })
        .collect();

    // Largest first; identifiers still ascend within a tie.
    extents.sort_by(|a, b| {
        b.key
            .total_cmp(&a.key)
            .then_with(|| a.system.id().cmp(b.system.id()))
    });

    let mut ranked = Vec::with_capacity(count.min(extents.len()) + 1);
    ranked.push(reference);
    ranked.extend(extents.into_iter().take(count).map(|ranked| ranked.system));
    ranked.reverse();
    ranked
}

/// Batch maxima used to scale markers relative to each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStatistics {
    max_star_radius: f64,
    max_planet_radius: Option<f64>,
    max_distance: Option<f64>,
}

impl BatchStatistics {
    /// # Errors
    ///
    /// Returns [`SelectionError::EmptyBatch`] if `systems` is empty.
    pub fn from_systems(systems: &[&SolarSystem]) -> Result<Self, SelectionError> {
        if systems.is_empty() {
            return Err(SelectionError::EmptyBatch);
        }

        let max_star_radius = systems
            .iter()
            .filter_map(|system| system.star().radius())
            .reduce(f64::max)
            .filter(|radius| *radius > 0.0)
            .unwrap_or(DEFAULT_STAR_RADIUS);

        let max_planet_radius = systems
            .iter()
            .flat_map(|system| system.star().planets())
            .filter_map(|planet| planet.radius())
            .reduce(f64::max)
            .filter(|radius| *radius > 0.0);

        let max_distance = systems
            .iter()
            .filter_map(|system| system.star().max_planet_distance())
            .reduce(f64::max);

        Ok(Self {
            max_star_radius,
            max_planet_radius,
            max_distance,
        })
    }

    pub fn max_star_radius(&self) -> f64 {
        self.max_star_radius
    }

    pub fn max_planet_radius(&self) -> Option<f64> {
        self.max_planet_radius
    }

    pub fn max_distance(&self) -> Option<f64> {
        self.max_distance
    }

    /// Star radius relative to the largest star of the batch, at most 1.
    ///
    /// Stars of unknown size use the default radius.
    pub fn relative_star_radius(&self, radius: Option<f64>) -> f64 {
        (radius.unwrap_or(DEFAULT_STAR_RADIUS) / self.max_star_radius).min(1.0)
    }

    /// Planet radius relative to the largest planet of the batch.
    pub fn relative_planet_radius(&self, radius: f64) -> Option<f64> {
        self.max_planet_radius.map(|max| radius / max)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use exoposter_catalog::{
        model::{Planet, Star},
        orbit,
    };

    use super::*;

    /// Period in days that puts a planet at `distance` AU around one solar mass.
    fn period_for(distance: f64) -> f64 {
        365.256363004 * distance.powf(1.5) / orbit::planet_distance(365.256363004, 1.0).powf(1.5)
    }

    fn system(id: &str, distances: &[Option<f64>], radius: Option<f64>) -> SolarSystem {
        let planets = distances
            .iter()
            .enumerate()
            .map(|(i, distance)| {
                Planet::new(
                    vec![format!("{id} {i}")],
                    id,
                    radius,
                    distance.map(period_for),
                    Some(1.0),
                )
            })
            .collect();
        SolarSystem::new(id, id, Star::new(vec![id.to_string()], None, Some(1.0), planets, None))
    }

    fn sun() -> SolarSystem {
        system("Sun", &[Some(1.0), Some(5.2)], Some(1.0))
    }

    fn ids<'a>(systems: &[&'a SolarSystem]) -> Vec<&'a str> {
        systems.iter().map(|s| s.id()).collect()
    }

    #[test]
    fn test_period_helper() {
        let planet = Planet::new(vec!["x".into()], "x", None, Some(period_for(2.0)), Some(1.0));
        assert_approx_eq!(f64, planet.distance().unwrap(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nearest_orders_around_reference() {
        let candidates = vec![
            system("a", &[Some(0.5)], None),
            system("b", &[Some(0.9)], None),
            system("c", &[Some(1.05)], None),
            system("d", &[Some(1.6)], None),
            system("e", &[Some(0.99), Some(3.0)], None),
        ];
        let sun = sun();

        let ranked = rank_nearest(&candidates, &sun, 4, 1.0);

        assert_eq!(ids(&ranked), ["b", "e", "Sun", "c", "d"]);
    }

    #[test]
    fn test_nearest_limits_each_side() {
        let candidates = vec![
            system("a", &[Some(0.5)], None),
            system("b", &[Some(0.9)], None),
            system("c", &[Some(1.05)], None),
        ];
        let sun = sun();

        let ranked = rank_nearest(&candidates, &sun, 2, 1.0);

        assert_eq!(ids(&ranked), ["b", "Sun", "c"]);
    }

    #[test]
    fn test_nearest_skips_unknown_distance_and_reference() {
        let candidates = vec![
            system("unknown", &[None], None),
            sun(),
            system("x", &[Some(1.2)], None),
        ];
        let sun = sun();

        let ranked = rank_nearest(&candidates, &sun, 10, 1.0);

        assert_eq!(ids(&ranked), ["Sun", "x"]);
    }

    #[test]
    fn test_nearest_ties_break_by_id() {
        let candidates = vec![
            system("z", &[Some(1.5)], None),
            system("m", &[Some(1.5)], None),
            system("q", &[Some(0.5)], None),
            system("b", &[Some(0.5)], None),
        ];
        let sun = sun();

        let ranked = rank_nearest(&candidates, &sun, 4, 1.0);

        assert_eq!(ids(&ranked), ["q", "b", "Sun", "m", "z"]);
    }

    #[test]
    fn test_max_extent_smallest_first_reference_last() {
        let candidates = vec![
            system("small", &[Some(0.1)], Some(0.5)),
            system("large", &[Some(0.2), Some(4.0)], Some(0.5)),
            system("medium", &[Some(2.0)], Some(0.5)),
        ];
        let sun = sun();

        let ranked = rank_max_extent(&candidates, &sun, 10, 5.0);

        assert_eq!(ids(&ranked), ["small", "medium", "large", "Sun"]);
    }

    #[test]
    fn test_max_extent_filters() {
        let candidates = vec![
            system("too-far", &[Some(7.0)], Some(0.5)),
            system("no-radius", &[Some(1.0)], None),
            system("no-distance", &[None], Some(0.5)),
            system("kept", &[Some(1.0)], Some(0.5)),
        ];
        let sun = sun();

        let ranked = rank_max_extent(&candidates, &sun, 10, 5.0);

        assert_eq!(ids(&ranked), ["kept", "Sun"]);
    }

    #[test]
    fn test_max_extent_takes_largest() {
        let candidates = vec![
            system("a", &[Some(1.0)], Some(0.5)),
            system("b", &[Some(2.0)], Some(0.5)),
            system("c", &[Some(3.0)], Some(0.5)),
        ];
        let sun = sun();

        let ranked = rank_max_extent(&candidates, &sun, 2, 5.0);

        assert_eq!(ids(&ranked), ["b", "c", "Sun"]);
    }

    #[test]
    fn test_batch_statistics_empty() {
        assert_eq!(
            BatchStatistics::from_systems(&[]),
            Err(SelectionError::EmptyBatch)
        );
    }

    #[test]
    fn test_batch_statistics_maxima() {
        let a = system("a", &[Some(1.0)], Some(0.3));
        let b = system("b", &[Some(2.5)], Some(1.2));
        let stats = BatchStatistics::from_systems(&[&a, &b]).unwrap();

        assert_approx_eq!(f64, stats.max_star_radius(), DEFAULT_STAR_RADIUS);
        assert_approx_eq!(f64, stats.max_planet_radius().unwrap(), 1.2);
        assert_approx_eq!(f64, stats.max_distance().unwrap(), 2.5, epsilon = 1e-9);
        assert_approx_eq!(f64, stats.relative_planet_radius(0.6).unwrap(), 0.5);
    }

    #[test]
    fn test_unknown_star_radius_never_exceeds_largest_star() {
        let small = system("small", &[Some(1.0)], None);
        let small = SolarSystem::new(
            "small",
            "small",
            Star::new(vec![], Some(0.4), Some(0.5), small.star().planets().to_vec(), None),
        );
        let unknown = system("unknown", &[Some(1.0)], None);
        let stats = BatchStatistics::from_systems(&[&small, &unknown]).unwrap();

        assert_approx_eq!(f64, stats.max_star_radius(), 0.4);
        assert_approx_eq!(f64, stats.relative_star_radius(Some(0.4)), 1.0);
        assert_approx_eq!(f64, stats.relative_star_radius(Some(0.2)), 0.5);
        assert_approx_eq!(f64, stats.relative_star_radius(None), 1.0);
    }

    #[test]
    fn test_batch_statistics_unknown_planet_radius() {
        let a = system("a", &[Some(1.0)], None);
        let stats = BatchStatistics::from_systems(&[&a]).unwrap();

        assert_eq!(stats.max_planet_radius(), None);
        assert_eq!(stats.relative_planet_radius(1.0), None);
    }

    fn arbitrary_systems() -> impl Strategy<Value = Vec<SolarSystem>> {
        prop::collection::vec(
            (0u32..20, prop::collection::vec(prop::option::of(0.05f64..6.0), 1..4)),
            0..25,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (tag, distances))| {
                    // Identifiers repeat so ties on id are exercised too.
                    let id = format!("s{}", tag + (i as u32 % 2));
                    system(&id, &distances, Some(0.5))
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_nearest_contains_reference_once(systems in arbitrary_systems(), count in 0usize..30) {
            let sun = sun();
            let ranked = rank_nearest(&systems, &sun, count, 1.0);

            let positions: Vec<usize> = ranked
                .iter()
                .enumerate()
                .filter(|(_, s)| s.id() == "Sun")
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(positions.len(), 1);

            let boundary = positions[0];
            for system in &ranked[..boundary] {
                prop_assert!(closest_delta(system, 1.0).unwrap() < 0.0);
            }
            for system in &ranked[boundary + 1..] {
                prop_assert!(closest_delta(system, 1.0).unwrap() >= 0.0);
            }
            prop_assert!(ranked.len() <= 2 * (count / 2) + 1);
        }

        #[test]
        fn prop_nearest_is_deterministic(systems in arbitrary_systems(), count in 0usize..30) {
            let sun = sun();
            let first = rank_nearest(&systems, &sun, count, 1.0);
            let second = rank_nearest(&systems, &sun, count, 1.0);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_max_extent_ascending(systems in arbitrary_systems(), count in 0usize..30) {
            let sun = sun();
            let ranked = rank_max_extent(&systems, &sun, count, 5.0);

            prop_assert_eq!(ranked.last().map(|s| s.id()), Some("Sun"));
            let extents: Vec<f64> = ranked[..ranked.len() - 1]
                .iter()
                .map(|s| s.star().max_planet_distance().unwrap())
                .collect();
            prop_assert!(extents.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(extents.iter().all(|e| *e <= 5.0));
        }
    }
}
