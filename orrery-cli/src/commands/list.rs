//! `orrery list` — every planet in catalog order.

use anyhow::Result;
use clap::Args;

use super::render;
use crate::RegistrySource;

/// Arguments for `orrery list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self, source: &RegistrySource) -> Result<()> {
        let registry = source.load()?;
        let planets = registry.all_planets();

        if self.json {
            return render::print_json(&planets);
        }
        if planets.is_empty() {
            println!("No planets in the catalog.");
            return Ok(());
        }
        render::print_planet_table(&planets);
        Ok(())
    }
}
