//! `orrery sort radius|sun|from <name>` — sorted views of the catalog.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use orrery_core::{PlanetRecord, PlanetRegistry, SortDirection};

use super::render;
use crate::RegistrySource;

/// Which key to sort by.
#[derive(Subcommand, Debug)]
pub enum SortCommand {
    /// By mean radius.
    Radius(SortFlags),

    /// By mean distance to the sun.
    Sun(SortFlags),

    /// By how far each orbit is from a reference planet's orbit.
    From {
        /// Reference planet.
        name: String,

        #[command(flatten)]
        flags: SortFlags,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct SortFlags {
    /// Largest first.
    #[arg(long)]
    pub desc: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl SortFlags {
    fn direction(self) -> SortDirection {
        SortDirection::from_ascending(!self.desc)
    }
}

pub fn run(cmd: SortCommand, source: &RegistrySource) -> Result<()> {
    let registry = source.load()?;
    let (planets, flags) = sorted(&registry, cmd)?;

    if flags.json {
        return render::print_json(&planets);
    }
    if planets.is_empty() {
        println!("No planets in the catalog.");
        return Ok(());
    }
    render::print_planet_table(&planets);
    Ok(())
}

fn sorted(registry: &PlanetRegistry, cmd: SortCommand) -> Result<(Vec<PlanetRecord>, SortFlags)> {
    let result = match cmd {
        SortCommand::Radius(flags) => (registry.sort_by_radius(flags.direction()), flags),
        SortCommand::Sun(flags) => (registry.sort_by_distance_to_sun(flags.direction()), flags),
        SortCommand::From { name, flags } => {
            let planets = registry
                .sort_by_distance_to_planet(&name, flags.direction())
                .with_context(|| format!("cannot sort by distance to '{name}'"))?;
            (planets, flags)
        }
    };
    Ok(result)
}
