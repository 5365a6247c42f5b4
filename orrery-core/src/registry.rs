//! The planet registry service.
//!
//! # Tiers
//!
//! ```text
//! PlanetRegistry   validation, error taxonomy, distance, sort views
//!   └─ PlanetStore keyed records + insertion order, absence as `None`
//! ```
//!
//! `get_planet` keeps the storage contract (absence is `None`); every other
//! lookup converts absence into [`RegistryError::NotFound`].
//!
//! Listing and sort operations return owned snapshots. Sorts are stable in both
//! directions: records with equal keys keep their insertion order.

use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::seed::{seed_records, SeedOptions};
use crate::store::PlanetStore;
use crate::types::{PlanetName, PlanetRecord, SortDirection};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetRegistry {
    store: PlanetStore,
}

// ---------------------------------------------------------------------------
// 1. Construction
// ---------------------------------------------------------------------------

impl PlanetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The eight standard planets, Mercury through Neptune.
    pub fn solar_system() -> Self {
        Self::seeded(SeedOptions::default())
    }

    pub fn seeded(options: SeedOptions) -> Self {
        let mut store = PlanetStore::new();
        for record in seed_records(options) {
            let inserted = store.insert(record).is_ok();
            debug_assert!(inserted, "seed data repeats a planet name");
        }
        Self { store }
    }

    /// Builds a registry from records in the given order.
    ///
    /// Measurements are taken as-is (a Sun at distance 0 is accepted); a
    /// repeated name fails with `RegistryError::AlreadyExists`.
    pub fn from_records<I>(records: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = PlanetRecord>,
    {
        let mut store = PlanetStore::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(Self { store })
    }
}

// ---------------------------------------------------------------------------
// 2. Reads
// ---------------------------------------------------------------------------

impl PlanetRegistry {
    pub fn get_planet(&self, name: &str) -> Option<&PlanetRecord> {
        self.store.get(name)
    }

    /// Like [`get_planet`](Self::get_planet) but absence is `NotFound`.
    pub fn require_planet(&self, name: &str) -> RegistryResult<&PlanetRecord> {
        self.store
            .get(name)
            .ok_or_else(|| RegistryError::not_found(name))
    }

    /// Snapshot of every record in insertion order.
    pub fn all_planets(&self) -> Vec<PlanetRecord> {
        self.store.iter().cloned().collect()
    }

    /// Names currently registered, in listing order.
    pub fn names(&self) -> Vec<PlanetName> {
        self.store.iter().map(|r| r.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

// ---------------------------------------------------------------------------
// 3. Mutations
// ---------------------------------------------------------------------------

impl PlanetRegistry {
    pub fn create_planet(
        &mut self,
        name: &str,
        radius: f64,
        distance_to_sun: f64,
    ) -> RegistryResult<&PlanetRecord> {
        validate_measurements(radius, distance_to_sun)?;
        let created = self
            .store
            .insert(PlanetRecord::new(name, radius, distance_to_sun))?;
        debug!(planet = name, radius, distance_to_sun, "created planet");
        Ok(created)
    }

    /// Replaces the measurements of `name`, optionally renaming it.
    ///
    /// Without a rename (`None`, an empty string, or `new_name == name`) the
    /// record keeps its listing position. A rename removes the old key and
    /// appends the record under `new_name`; renaming onto a taken name fails
    /// with `AlreadyExists` and changes nothing.
    pub fn update_planet(
        &mut self,
        name: &str,
        radius: f64,
        distance_to_sun: f64,
        new_name: Option<&str>,
    ) -> RegistryResult<&PlanetRecord> {
        validate_measurements(radius, distance_to_sun)?;
        if !self.store.contains(name) {
            return Err(RegistryError::not_found(name));
        }

        // An empty new name means "keep the current one".
        match new_name.filter(|target| !target.is_empty() && *target != name) {
            None => {
                debug!(planet = name, radius, distance_to_sun, "updated planet");
                self.store
                    .replace(PlanetRecord::new(name, radius, distance_to_sun))
            }
            Some(target) => {
                if self.store.contains(target) {
                    return Err(RegistryError::already_exists(target));
                }
                self.store.remove(name);
                debug!(planet = name, new_name = target, "renamed planet");
                self.store
                    .insert(PlanetRecord::new(target, radius, distance_to_sun))
            }
        }
    }

    pub fn delete_planet(&mut self, name: &str) -> RegistryResult<PlanetRecord> {
        let removed = self
            .store
            .remove(name)
            .ok_or_else(|| RegistryError::not_found(name))?;
        debug!(planet = name, "deleted planet");
        Ok(removed)
    }
}

// ---------------------------------------------------------------------------
// 4. Distance and sort views
// ---------------------------------------------------------------------------

impl PlanetRegistry {
    /// Absolute difference of the two planets' distances to the sun.
    ///
    /// Either name failing to resolve is an `InvalidArgument`. A planet at
    /// distance 0 is a valid operand.
    pub fn distance_between(&self, first: &str, second: &str) -> RegistryResult<f64> {
        match (self.store.get(first), self.store.get(second)) {
            (Some(a), Some(b)) => Ok(a.distance_to(b)),
            _ => Err(RegistryError::InvalidArgument(format!(
                "two existing planet names are required (got '{first}' and '{second}')"
            ))),
        }
    }

    /// Every planet ordered by how far its orbit is from `name`'s orbit.
    pub fn sort_by_distance_to_planet(
        &self,
        name: &str,
        direction: SortDirection,
    ) -> RegistryResult<Vec<PlanetRecord>> {
        let reference = self.require_planet(name)?;
        Ok(self.sorted_by(direction, |record| record.distance_to(reference)))
    }

    pub fn sort_by_radius(&self, direction: SortDirection) -> Vec<PlanetRecord> {
        self.sorted_by(direction, |record| record.radius)
    }

    pub fn sort_by_distance_to_sun(&self, direction: SortDirection) -> Vec<PlanetRecord> {
        self.sorted_by(direction, |record| record.distance_to_sun)
    }

    fn sorted_by<F>(&self, direction: SortDirection, key: F) -> Vec<PlanetRecord>
    where
        F: Fn(&PlanetRecord) -> f64,
    {
        let mut planets = self.all_planets();
        // `sort_by` is stable; descending flips the comparison, not the result.
        planets.sort_by(|a, b| direction.apply(key(a).total_cmp(&key(b))));
        planets
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn validate_measurements(radius: f64, distance_to_sun: f64) -> RegistryResult<()> {
    if is_positive(radius) && is_positive(distance_to_sun) {
        return Ok(());
    }
    Err(RegistryError::InvalidArgument(format!(
        "radius and distance_to_sun must be positive numbers (got radius={radius}, distance_to_sun={distance_to_sun})"
    )))
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
