//! Shared console output: planet tables, JSON, operation outcomes.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use serde_json::{json, Value};
use tabled::{settings::Style, Table, Tabled};

use orrery_core::{Outcome, PlanetRecord};

#[derive(Tabled)]
struct PlanetRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "planet")]
    name: String,
    #[tabled(rename = "radius (km)")]
    radius: String,
    #[tabled(rename = "distance to sun (km)")]
    distance_to_sun: String,
}

pub fn print_planet_table(planets: &[PlanetRecord]) {
    let rows: Vec<PlanetRow> = planets
        .iter()
        .enumerate()
        .map(|(i, p)| PlanetRow {
            position: i + 1,
            name: p.name.to_string(),
            radius: format_km(p.radius),
            distance_to_sun: format_km(p.distance_to_sun),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to serialize JSON output")?
    );
    Ok(())
}

/// Kilometres without a trailing `.0` on whole values.
pub fn format_km(km: f64) -> String {
    format!("{km}")
}

/// Console rendering of a successful operation.
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Planets(planets) if planets.is_empty() => println!("  (no planets)"),
        Outcome::Planets(planets) => print_planet_table(planets),
        Outcome::Planet(Some(planet)) => print_planet_table(std::slice::from_ref(planet)),
        Outcome::Planet(None) | Outcome::Distance(_) => println!("  {outcome}"),
        Outcome::Created(_) | Outcome::Updated(_) | Outcome::Deleted(_) => {
            println!("  {} {outcome}", "✓".green().bold())
        }
    }
}

/// JSON rendering of a successful operation.
pub fn outcome_json(outcome: &Outcome) -> Value {
    match outcome {
        Outcome::Planet(planet) => json!({ "planet": planet }),
        Outcome::Planets(planets) => json!({ "planets": planets }),
        Outcome::Distance(km) => json!({ "distance_km": km }),
        Outcome::Created(name) => json!({ "created": name }),
        Outcome::Updated(name) => json!({ "updated": name }),
        Outcome::Deleted(name) => json!({ "deleted": name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_kilometres_have_no_fraction() {
        assert_eq!(format_km(2_762_763_270.0), "2762763270");
        assert_eq!(format_km(2_439.7), "2439.7");
    }

    #[test]
    fn outcome_json_shapes() {
        let value = outcome_json(&Outcome::Deleted("Jupiter".into()));
        assert_eq!(value, json!({ "deleted": "Jupiter" }));

        let value = outcome_json(&Outcome::Planet(None));
        assert_eq!(value, json!({ "planet": null }));
    }
}
