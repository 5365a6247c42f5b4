//! YAML catalog files that replace the built-in seed.
//!
//! # Layout
//!
//! ```text
//! ~/.orrery/
//!   catalog.yaml   (optional — used when no --catalog path is given)
//! ```
//!
//! ```yaml
//! version: 1
//! planets:
//!   - { name: Earth, radius: 6371, distance_to_sun: 149597870 }
//! ```
//!
//! # API pattern
//!
//! Functions that need the home directory have two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Catalogs are read, never written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::registry::PlanetRegistry;
use crate::seed::SeedOptions;
use crate::types::PlanetRecord;

pub const CATALOG_VERSION: u32 = 1;

/// Root of a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub planets: Vec<PlanetRecord>,
}

fn default_version() -> u32 {
    CATALOG_VERSION
}

impl Catalog {
    /// Registry holding the catalog's planets in file order.
    pub fn into_registry(self) -> RegistryResult<PlanetRegistry> {
        PlanetRegistry::from_records(self.planets)
    }
}

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.orrery/catalog.yaml` — pure, no I/O.
pub fn catalog_path_at(home: &Path) -> PathBuf {
    home.join(".orrery").join("catalog.yaml")
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load a catalog file.
///
/// Returns `RegistryError::CatalogNotFound` if absent,
/// `RegistryError::Parse` (with path + line context) if malformed YAML.
pub fn load_catalog_at(path: &Path) -> RegistryResult<Catalog> {
    if !path.exists() {
        return Err(RegistryError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_yaml::from_str(&contents).map_err(|e| RegistryError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(
        path = %path.display(),
        planets = catalog.planets.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

// ---------------------------------------------------------------------------
// 3. Resolve
// ---------------------------------------------------------------------------

/// Pick the registry a front-end should start from.
///
/// Precedence: `explicit` path (must exist) → `<home>/.orrery/catalog.yaml`
/// if present → built-in seed with `seed` options.
pub fn resolve_registry_at(
    home: &Path,
    explicit: Option<&Path>,
    seed: SeedOptions,
) -> RegistryResult<PlanetRegistry> {
    if let Some(path) = explicit {
        return load_catalog_at(path)?.into_registry();
    }

    let default_path = catalog_path_at(home);
    if default_path.exists() {
        return load_catalog_at(&default_path)?.into_registry();
    }

    debug!(?seed, "no catalog file, using built-in seed");
    Ok(PlanetRegistry::seeded(seed))
}

/// `resolve_registry_at` convenience wrapper.
pub fn resolve_registry(
    explicit: Option<&Path>,
    seed: SeedOptions,
) -> RegistryResult<PlanetRegistry> {
    resolve_registry_at(&home()?, explicit, seed)
}

fn home() -> RegistryResult<PathBuf> {
    dirs::home_dir().ok_or(RegistryError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn catalog_path_is_correct() {
        let home = TempDir::new().expect("tempdir");
        assert!(catalog_path_at(home.path()).ends_with(".orrery/catalog.yaml"));
    }

    #[test]
    fn missing_version_defaults() {
        let catalog: Catalog = serde_yaml::from_str("planets: []\n").expect("parse");
        assert_eq!(catalog.version, CATALOG_VERSION);
        assert!(catalog.planets.is_empty());
    }

    #[test]
    fn resolve_without_catalog_uses_seed() {
        let home = TempDir::new().expect("tempdir");
        let registry =
            resolve_registry_at(home.path(), None, SeedOptions::default()).expect("resolve");
        assert_eq!(registry, PlanetRegistry::solar_system());
    }

    #[test]
    fn load_missing_catalog_returns_not_found() {
        let home = TempDir::new().expect("tempdir");
        let err = load_catalog_at(&catalog_path_at(home.path())).unwrap_err();
        assert!(matches!(err, RegistryError::CatalogNotFound { .. }));
    }
}
