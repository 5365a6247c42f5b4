//! `orrery apply <script.yaml>` — run a script of operations.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use orrery_core::{ops, PlanetRegistry, Script};

use super::render;
use crate::RegistrySource;

/// Arguments for `orrery apply`.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// YAML file with an `operations:` list.
    pub script: PathBuf,

    /// Continue past failed operations instead of stopping at the first one.
    #[arg(long)]
    pub keep_going: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ApplyArgs {
    pub fn run(self, source: &RegistrySource) -> Result<()> {
        let script = ops::load_script_at(&self.script)
            .with_context(|| format!("failed to read script '{}'", self.script.display()))?;
        let mut registry = source.load()?;
        run_script(&mut registry, &script, self.keep_going, self.json)
    }
}

#[derive(Serialize)]
struct StepJson {
    step: usize,
    operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Applies each operation in order and reports it.
///
/// Stops at the first failure unless `keep_going`; either way a failed step
/// makes the whole run fail.
pub fn run_script(
    registry: &mut PlanetRegistry,
    script: &Script,
    keep_going: bool,
    json: bool,
) -> Result<()> {
    let mut steps = Vec::new();
    let mut failures = 0usize;

    for (index, operation) in script.operations.iter().enumerate() {
        let step = index + 1;
        let label = operation.label();
        let result = registry.apply(operation);

        if json {
            let (outcome, error) = match &result {
                Ok(outcome) => (Some(render::outcome_json(outcome)), None),
                Err(err) => (None, Some(err.to_string())),
            };
            steps.push(StepJson {
                step,
                operation: label.clone(),
                outcome,
                error,
            });
        } else {
            println!("{} {}", format!("[{step}]").bright_black(), label.bold());
            match &result {
                Ok(outcome) => render::print_outcome(outcome),
                Err(err) => println!("  {} {err}", "✗".red().bold()),
            }
        }

        if let Err(err) = result {
            failures += 1;
            if !keep_going {
                if json {
                    render::print_json(&steps)?;
                }
                return Err(err).with_context(|| format!("operation #{step} ({label}) failed"));
            }
        }
    }

    if json {
        render::print_json(&steps)?;
    }
    if failures > 0 {
        return Err(anyhow!("{failures} operation(s) failed"));
    }
    Ok(())
}
