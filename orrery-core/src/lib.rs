//! Orrery core library — planet records, the registry service, seed data,
//! catalog files, operation scripts, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`RegistryError`]
//! - [`store`] — keyed storage tier
//! - [`registry`] — [`PlanetRegistry`] service
//! - [`seed`] — built-in solar system
//! - [`catalog`] — YAML catalog loading and registry resolution
//! - [`ops`] — serializable operations and scripts

pub mod catalog;
pub mod error;
pub mod ops;
pub mod registry;
pub mod seed;
pub mod store;
pub mod types;

pub use catalog::Catalog;
pub use error::{RegistryError, RegistryResult};
pub use ops::{Operation, Outcome, Script};
pub use registry::PlanetRegistry;
pub use seed::SeedOptions;
pub use types::{PlanetName, PlanetRecord, SortDirection};
