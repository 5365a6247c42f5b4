//! Serializable registry operations and scripts of them.
//!
//! A script is a YAML document listing operations in the order they run:
//!
//! ```yaml
//! operations:
//!   - { op: create, name: Earth2, radius: 222, distance_to_sun: 333 }
//!   - { op: update, name: Mars, radius: 111, distance_to_sun: 111, new_name: Mars2 }
//!   - { op: sort_by_radius, descending: true }
//!   - { op: distance, from: Venus, to: Uranus }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};
use crate::registry::PlanetRegistry;
use crate::types::{PlanetName, PlanetRecord, SortDirection};

/// One call into the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Get {
        name: String,
    },
    List,
    Create {
        name: String,
        radius: f64,
        distance_to_sun: f64,
    },
    Update {
        name: String,
        radius: f64,
        distance_to_sun: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        new_name: Option<String>,
    },
    Delete {
        name: String,
    },
    Distance {
        from: String,
        to: String,
    },
    SortByRadius {
        #[serde(default)]
        descending: bool,
    },
    SortByDistanceToSun {
        #[serde(default)]
        descending: bool,
    },
    SortByDistanceToPlanet {
        name: String,
        #[serde(default)]
        descending: bool,
    },
}

impl Operation {
    /// Short label used when reporting progress or failures.
    pub fn label(&self) -> String {
        match self {
            Operation::Get { name } => format!("get {name}"),
            Operation::List => "list".to_string(),
            Operation::Create { name, .. } => format!("create {name}"),
            Operation::Update {
                name,
                new_name: Some(new_name),
                ..
            } => format!("update {name} -> {new_name}"),
            Operation::Update { name, .. } => format!("update {name}"),
            Operation::Delete { name } => format!("delete {name}"),
            Operation::Distance { from, to } => format!("distance {from} <-> {to}"),
            Operation::SortByRadius { descending } => {
                format!("sort by radius, {}", direction(*descending))
            }
            Operation::SortByDistanceToSun { descending } => {
                format!("sort by distance to sun, {}", direction(*descending))
            }
            Operation::SortByDistanceToPlanet { name, descending } => {
                format!("sort by distance to {name}, {}", direction(*descending))
            }
        }
    }
}

fn direction(descending: bool) -> SortDirection {
    SortDirection::from_ascending(!descending)
}

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Planet(Option<PlanetRecord>),
    Planets(Vec<PlanetRecord>),
    Distance(f64),
    Created(PlanetName),
    Updated(PlanetName),
    Deleted(PlanetName),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Planet(Some(p)) => write!(
                f,
                "{} (radius {} km, {} km from the sun)",
                p.name, p.radius, p.distance_to_sun
            ),
            Outcome::Planet(None) => write!(f, "no such planet"),
            Outcome::Planets(planets) => {
                let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
                write!(f, "{}", names.join(", "))
            }
            Outcome::Distance(km) => write!(f, "{km} km"),
            Outcome::Created(name) => write!(f, "Planet {name} successfully created."),
            Outcome::Updated(name) => write!(f, "Planet {name} successfully updated."),
            Outcome::Deleted(name) => write!(f, "Planet {name} successfully deleted."),
        }
    }
}

impl PlanetRegistry {
    /// Runs a single operation. A failure leaves the registry unchanged.
    pub fn apply(&mut self, operation: &Operation) -> RegistryResult<Outcome> {
        let outcome = match operation {
            Operation::Get { name } => Outcome::Planet(self.get_planet(name).cloned()),
            Operation::List => Outcome::Planets(self.all_planets()),
            Operation::Create {
                name,
                radius,
                distance_to_sun,
            } => Outcome::Created(
                self.create_planet(name, *radius, *distance_to_sun)?
                    .name
                    .clone(),
            ),
            Operation::Update {
                name,
                radius,
                distance_to_sun,
                new_name,
            } => Outcome::Updated(
                self.update_planet(name, *radius, *distance_to_sun, new_name.as_deref())?
                    .name
                    .clone(),
            ),
            Operation::Delete { name } => Outcome::Deleted(self.delete_planet(name)?.name),
            Operation::Distance { from, to } => Outcome::Distance(self.distance_between(from, to)?),
            Operation::SortByRadius { descending } => {
                Outcome::Planets(self.sort_by_radius(direction(*descending)))
            }
            Operation::SortByDistanceToSun { descending } => {
                Outcome::Planets(self.sort_by_distance_to_sun(direction(*descending)))
            }
            Operation::SortByDistanceToPlanet { name, descending } => {
                Outcome::Planets(self.sort_by_distance_to_planet(name, direction(*descending))?)
            }
        };
        Ok(outcome)
    }
}

// ---------------------------------------------------------------------------
// Scripts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Script {
    /// Tour of every operation against the built-in seed: list, look up Earth,
    /// create Earth2, rename Mars to Mars2, delete Jupiter, then the sort and
    /// distance views.
    pub fn demo() -> Self {
        let operations = vec![
            Operation::List,
            Operation::Get {
                name: "Earth".into(),
            },
            Operation::Create {
                name: "Earth2".into(),
                radius: 222.0,
                distance_to_sun: 333.0,
            },
            Operation::Update {
                name: "Mars".into(),
                radius: 111.0,
                distance_to_sun: 111.0,
                new_name: Some("Mars2".into()),
            },
            Operation::Delete {
                name: "Jupiter".into(),
            },
            Operation::SortByRadius { descending: true },
            Operation::SortByDistanceToSun { descending: false },
            Operation::Distance {
                from: "Venus".into(),
                to: "Uranus".into(),
            },
            Operation::SortByDistanceToPlanet {
                name: "Earth".into(),
                descending: true,
            },
        ];
        Self { operations }
    }
}

/// Load a script file.
///
/// Returns `RegistryError::ScriptNotFound` if absent,
/// `RegistryError::Parse` (with path + line context) if malformed YAML.
pub fn load_script_at(path: &Path) -> RegistryResult<Script> {
    if !path.exists() {
        return Err(RegistryError::ScriptNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|e| RegistryError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_operations() {
        let yaml = "operations:\n  \
            - { op: create, name: X, radius: 1, distance_to_sun: 2 }\n  \
            - { op: update, name: X, radius: 3, distance_to_sun: 4, new_name: Y }\n  \
            - { op: sort_by_distance_to_planet, name: Y }\n  \
            - op: list\n";
        let script: Script = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(script.operations.len(), 4);
        assert_eq!(
            script.operations[1],
            Operation::Update {
                name: "X".into(),
                radius: 3.0,
                distance_to_sun: 4.0,
                new_name: Some("Y".into()),
            }
        );
        assert_eq!(
            script.operations[2],
            Operation::SortByDistanceToPlanet {
                name: "Y".into(),
                descending: false,
            }
        );
    }

    #[test]
    fn mutation_outcomes_read_as_messages() {
        let mut registry = PlanetRegistry::solar_system();
        let outcome = registry
            .apply(&Operation::Delete {
                name: "Jupiter".into(),
            })
            .expect("delete");
        assert_eq!(outcome.to_string(), "Planet Jupiter successfully deleted.");
    }

    #[test]
    fn failed_operation_leaves_registry_unchanged() {
        let mut registry = PlanetRegistry::solar_system();
        let before = registry.clone();
        let err = registry
            .apply(&Operation::Create {
                name: "Earth".into(),
                radius: 1.0,
                distance_to_sun: 1.0,
            })
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyExists { .. }));
        assert_eq!(registry, before);
    }

    #[test]
    fn demo_runs_cleanly_against_the_seed() {
        let mut registry = PlanetRegistry::solar_system();
        let outcomes: Vec<Outcome> = Script::demo()
            .operations
            .iter()
            .map(|op| registry.apply(op).expect("demo step"))
            .collect();

        assert_eq!(outcomes.len(), 9);
        assert_eq!(outcomes[7], Outcome::Distance(2_762_763_270.0));
        assert!(registry.contains("Mars2"));
        assert!(!registry.contains("Jupiter"));
        assert!(registry.contains("Earth2"));
    }

    #[test]
    fn labels_describe_the_call() {
        let op = Operation::SortByDistanceToPlanet {
            name: "Earth".into(),
            descending: true,
        };
        assert_eq!(op.label(), "sort by distance to Earth, descending");
    }
}
