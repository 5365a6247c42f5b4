//! Keyed storage for planet records.
//!
//! The store is the low tier of the registry: it knows nothing about
//! measurement validation and reports absence as `None` rather than as an
//! error. Lookups go through a `HashMap`; listing order is kept in a separate
//! key list so iteration always follows insertion order.

use std::collections::HashMap;

use crate::error::{RegistryError, RegistryResult};
use crate::types::{PlanetName, PlanetRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetStore {
    records: HashMap<PlanetName, PlanetRecord>,
    order: Vec<PlanetName>,
}

impl PlanetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PlanetRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Appends a record under its own name.
    ///
    /// Returns `RegistryError::AlreadyExists` if the key is taken; the store is
    /// left untouched in that case.
    pub fn insert(&mut self, record: PlanetRecord) -> RegistryResult<&PlanetRecord> {
        if self.records.contains_key(record.name.as_str()) {
            return Err(RegistryError::already_exists(record.name.0));
        }
        let key = record.name.clone();
        self.order.push(key.clone());
        Ok(&*self.records.entry(key).or_insert(record))
    }

    /// Overwrites the record stored under `record.name`, keeping its position.
    pub fn replace(&mut self, record: PlanetRecord) -> RegistryResult<&PlanetRecord> {
        match self.records.get_mut(record.name.as_str()) {
            Some(slot) => {
                *slot = record;
                Ok(&*slot)
            }
            None => Err(RegistryError::not_found(record.name.0)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<PlanetRecord> {
        let record = self.records.remove(name)?;
        self.order.retain(|key| key.as_str() != name);
        Some(record)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PlanetRecord> + '_ {
        // Every key in `order` has a record; the two are only mutated together.
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(store: &PlanetStore) -> Vec<&str> {
        store.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn insert_then_get() {
        let mut store = PlanetStore::new();
        store.insert(PlanetRecord::new("Testplanet", 1000.0, 2000.0)).expect("insert");
        assert_eq!(
            store.get("Testplanet"),
            Some(&PlanetRecord::new("Testplanet", 1000.0, 2000.0))
        );
        assert!(store.get("testplanet").is_none());
    }

    #[test]
    fn duplicate_insert_is_rejected_and_keeps_original() {
        let mut store = PlanetStore::new();
        store.insert(PlanetRecord::new("Dup", 1.0, 2.0)).expect("insert");
        let err = store.insert(PlanetRecord::new("Dup", 9.0, 9.0)).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyExists { .. }));
        assert_eq!(store.get("Dup").map(|r| r.radius), Some(1.0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_keeps_position() {
        let mut store = PlanetStore::new();
        for name in ["A", "B", "C"] {
            store.insert(PlanetRecord::new(name, 1.0, 1.0)).expect("insert");
        }
        store.replace(PlanetRecord::new("B", 5.0, 6.0)).expect("replace");
        assert_eq!(names(&store), ["A", "B", "C"]);
        assert_eq!(store.get("B").map(|r| r.distance_to_sun), Some(6.0));
    }

    #[test]
    fn replace_missing_is_not_found() {
        let mut store = PlanetStore::new();
        let err = store.replace(PlanetRecord::new("Nonexistentplanet", 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_drops_key_from_order() {
        let mut store = PlanetStore::new();
        for name in ["A", "B", "C"] {
            store.insert(PlanetRecord::new(name, 1.0, 1.0)).expect("insert");
        }
        assert!(store.remove("B").is_some());
        assert!(store.remove("B").is_none());
        assert_eq!(names(&store), ["A", "C"]);
        assert!(!store.contains("B"));
    }
}
