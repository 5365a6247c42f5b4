//! `orrery demo` — every registry operation against the built-in planets.

use anyhow::Result;
use clap::Args;

use orrery_core::{PlanetRegistry, Script};

use super::apply::run_script;
use crate::RegistrySource;

/// Arguments for `orrery demo`.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl DemoArgs {
    /// Ignores `--catalog`: the walkthrough names planets from the built-in seed.
    pub fn run(self, source: &RegistrySource) -> Result<()> {
        let mut registry = PlanetRegistry::seeded(source.seed_options());
        run_script(&mut registry, &Script::demo(), false, self.json)
    }
}
