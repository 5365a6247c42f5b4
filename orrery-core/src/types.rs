//! Domain types for the planet registry.
//!
//! Distances and radii are stored as raw kilometres in `f64`.
//! All types are serializable/deserializable via serde (YAML catalogs, JSON output).

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// The unique, case-sensitive key of a planet record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanetName(pub String);

impl PlanetName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PlanetName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PlanetName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// Lets the store look records up by `&str` without allocating a key.
impl Borrow<str> for PlanetName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Direction of a sort view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Maps the `ascending` flag of the sort operations to a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Orients an ascending comparison. Equal keys stay `Equal` in both
    /// directions so a stable sort keeps their insertion order.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single planet's stored attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: PlanetName,
    /// Mean radius in kilometres.
    pub radius: f64,
    /// Mean distance to the sun in kilometres.
    pub distance_to_sun: f64,
}

impl PlanetRecord {
    pub fn new(name: impl Into<PlanetName>, radius: f64, distance_to_sun: f64) -> Self {
        Self {
            name: name.into(),
            radius,
            distance_to_sun,
        }
    }

    /// Absolute difference between the two records' distances to the sun.
    pub fn distance_to(&self, other: &PlanetRecord) -> f64 {
        (self.distance_to_sun - other.distance_to_sun).abs()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(PlanetName::from("Earth").to_string(), "Earth");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_ne!(PlanetName::from("earth"), PlanetName::from("Earth"));
        assert_eq!(PlanetName::from("Earth"), PlanetName::from(String::from("Earth")));
    }

    #[test]
    fn descending_keeps_ties_equal() {
        let dir = SortDirection::Descending;
        assert_eq!(dir.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(dir.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortDirection::from_ascending(true), SortDirection::Ascending);
        assert_eq!(SortDirection::from_ascending(false), SortDirection::Descending);
    }

    #[test]
    fn distance_to_is_symmetric() {
        let a = PlanetRecord::new("A", 1.0, 10.0);
        let b = PlanetRecord::new("B", 1.0, 25.5);
        assert_eq!(a.distance_to(&b), 15.5);
        assert_eq!(b.distance_to(&a), 15.5);
    }

    #[test]
    fn record_serde_field_names() {
        let yaml = "name: Mars\nradius: 3389.5\ndistance_to_sun: 227936640\n";
        let record: PlanetRecord = serde_yaml::from_str(yaml).expect("deserialize");
        assert_eq!(record, PlanetRecord::new("Mars", 3389.5, 227_936_640.0));
    }
}
