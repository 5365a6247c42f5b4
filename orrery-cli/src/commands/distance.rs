//! `orrery distance <a> <b>` — gap between two orbits.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::render;
use crate::RegistrySource;

/// Arguments for `orrery distance`.
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// First planet.
    pub from: String,

    /// Second planet.
    pub to: String,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DistanceJson<'a> {
    from: &'a str,
    to: &'a str,
    distance_km: f64,
}

impl DistanceArgs {
    pub fn run(self, source: &RegistrySource) -> Result<()> {
        let registry = source.load()?;
        let km = registry
            .distance_between(&self.from, &self.to)
            .with_context(|| format!("cannot measure '{}' to '{}'", self.from, self.to))?;

        if self.json {
            return render::print_json(&DistanceJson {
                from: &self.from,
                to: &self.to,
                distance_km: km,
            });
        }
        println!(
            "Distance between {} and {}: {} km",
            self.from,
            self.to,
            render::format_km(km)
        );
        Ok(())
    }
}
