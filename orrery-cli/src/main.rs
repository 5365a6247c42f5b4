//! Orrery — planet registry CLI.
//!
//! # Usage
//!
//! ```text
//! orrery [--catalog <path>] [--with-sun] [--with-pluto] [--verbose] <command>
//!
//! orrery list [--json]
//! orrery show <name> [--json]
//! orrery distance <a> <b> [--json]
//! orrery sort radius|sun [--desc] [--json]
//! orrery sort from <name> [--desc] [--json]
//! orrery apply <script.yaml> [--keep-going] [--json]
//! orrery demo [--json]
//! ```
//!
//! Nothing is written back: every invocation starts from the catalog (or the
//! built-in seed) and mutations only live for the length of the run.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use commands::{
    apply::ApplyArgs, demo::DemoArgs, distance::DistanceArgs, list::ListArgs, show::ShowArgs,
    sort::SortCommand,
};
use orrery_core::{catalog, PlanetRegistry, SeedOptions};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "orrery",
    version,
    about = "Query and reshape an in-memory catalog of planets",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    source: RegistrySource,

    /// Log registry activity to stderr (same as RUST_LOG=debug).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every planet in catalog order.
    List(ListArgs),

    /// Show a single planet.
    Show(ShowArgs),

    /// Distance between two planets' orbits, in kilometres.
    Distance(DistanceArgs),

    /// Sorted views of the catalog.
    Sort {
        #[command(subcommand)]
        command: SortCommand,
    },

    /// Run a YAML script of operations against the catalog.
    Apply(ApplyArgs),

    /// Walk through every operation against the built-in solar system.
    Demo(DemoArgs),
}

// ---------------------------------------------------------------------------
// Shared registry source — where the starting records come from
// ---------------------------------------------------------------------------

/// Global options selecting the starting records.
#[derive(Args, Debug, Clone, Default)]
pub struct RegistrySource {
    /// YAML catalog to load instead of ~/.orrery/catalog.yaml or the built-in seed.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Include the Sun (distance 0) in the built-in seed.
    #[arg(long, global = true)]
    pub with_sun: bool,

    /// Include Pluto in the built-in seed.
    #[arg(long, global = true)]
    pub with_pluto: bool,
}

impl RegistrySource {
    pub fn seed_options(&self) -> SeedOptions {
        SeedOptions {
            include_sun: self.with_sun,
            include_pluto: self.with_pluto,
        }
    }

    pub fn load(&self) -> Result<PlanetRegistry> {
        catalog::resolve_registry(self.catalog.as_deref(), self.seed_options())
            .context("failed to load planet catalog")
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = cli.source;
    match cli.command {
        Commands::List(args) => args.run(&source),
        Commands::Show(args) => args.run(&source),
        Commands::Distance(args) => args.run(&source),
        Commands::Sort { command } => commands::sort::run(command, &source),
        Commands::Apply(args) => args.run(&source),
        Commands::Demo(args) => args.run(&source),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
