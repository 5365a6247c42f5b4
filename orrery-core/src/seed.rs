//! Built-in solar system seed data.
//!
//! All values are raw kilometres. The Sun sits at distance 0 and is only
//! added on request, as is Pluto.

use crate::types::PlanetRecord;

/// Which optional bodies to include alongside the eight planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedOptions {
    /// Prepend the Sun (`distance_to_sun = 0`).
    pub include_sun: bool,
    /// Append Pluto.
    pub include_pluto: bool,
}

const SUN: (&str, f64, f64) = ("Sun", 696_340.0, 0.0);

const PLANETS: [(&str, f64, f64); 8] = [
    ("Mercury", 2_439.7, 57_909_175.0),
    ("Venus", 6_051.8, 108_208_930.0),
    ("Earth", 6_371.0, 149_597_870.0),
    ("Mars", 3_389.5, 227_936_640.0),
    ("Jupiter", 69_911.0, 778_412_010.0),
    ("Saturn", 58_232.0, 1_426_725_400.0),
    ("Uranus", 25_362.0, 2_870_972_200.0),
    ("Neptune", 24_622.0, 4_503_443_660.0),
];

const PLUTO: (&str, f64, f64) = ("Pluto", 1_188.3, 5_906_380_000.0);

/// Seed records in listing order.
pub fn seed_records(options: SeedOptions) -> Vec<PlanetRecord> {
    let sun = options.include_sun.then_some(SUN);
    let pluto = options.include_pluto.then_some(PLUTO);
    sun.into_iter()
        .chain(PLANETS)
        .chain(pluto)
        .map(|(name, radius, distance)| PlanetRecord::new(name, radius, distance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[PlanetRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn default_seed_is_the_eight_planets() {
        let records = seed_records(SeedOptions::default());
        assert_eq!(
            names(&records),
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
    }

    #[test]
    fn sun_first_and_pluto_last() {
        let records = seed_records(SeedOptions {
            include_sun: true,
            include_pluto: true,
        });
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].name.as_str(), "Sun");
        assert_eq!(records[0].distance_to_sun, 0.0);
        assert_eq!(records[9].name.as_str(), "Pluto");
    }

    #[test]
    fn seed_is_ordered_by_distance() {
        let records = seed_records(SeedOptions::default());
        assert!(records
            .windows(2)
            .all(|w| w[0].distance_to_sun < w[1].distance_to_sun));
    }
}
