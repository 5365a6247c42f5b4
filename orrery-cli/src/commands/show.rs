//! `orrery show <name>`

use anyhow::{Context, Result};
use clap::Args;

use super::render;
use crate::RegistrySource;

/// Arguments for `orrery show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Planet name (case-sensitive).
    pub name: String,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub fn run(self, source: &RegistrySource) -> Result<()> {
        let registry = source.load()?;
        let planet = registry
            .require_planet(&self.name)
            .with_context(|| {
                format!(
                    "cannot show '{}' — run `orrery list` to see known planets",
                    self.name
                )
            })?;

        if self.json {
            return render::print_json(planet);
        }
        render::print_planet_table(std::slice::from_ref(planet));
        Ok(())
    }
}
