//! Batch runner for the bee polytope guard.
//! Reads a guard config and a batch of node readings, prints one actuation
//! directive per reading as a JSON line on stdout.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bee_core::config::GuardConfig;
use bee_core::region::RegionClass;
use bee_polytope_guards::{issue_directive, BeePolytopeGuard, SensorReading};
use clap::{Arg, ArgAction, Command};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("bee-guard")
        .about("Pollinator hazard + polytope region guard for nanoswarm duty control")
        .arg(
            Arg::new("config")
                .long("config")
                .required(true)
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to guard config JSON (hazard parameters, polytopes, thresholds)"),
        )
        .arg(
            Arg::new("readings")
                .long("readings")
                .required(true)
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to a JSON array of node sensor readings"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Refuse to run when the config fails validation"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: &Path, strict: bool) -> Result<GuardConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = GuardConfig::from_json_str(&raw)
        .with_context(|| format!("invalid guard config in {}", path.display()))?;

    if let Err(e) = config.validate() {
        if strict {
            return Err(e).context("config rejected by --strict");
        }
        warn!(error = %e, "guard config failed validation, running anyway");
    }
    Ok(config)
}

fn parse_readings(raw: &str) -> Result<Vec<SensorReading>> {
    serde_json::from_str(raw).context("readings must be a JSON array of sensor readings")
}

fn load_readings(path: &Path) -> Result<Vec<SensorReading>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read readings {}", path.display()))?;
    parse_readings(&raw).with_context(|| format!("in {}", path.display()))
}

fn run(
    guard: &BeePolytopeGuard,
    readings: &[SensorReading],
    out: &mut impl Write,
) -> Result<BTreeMap<RegionClass, usize>> {
    let mut per_region = BTreeMap::new();
    for reading in readings {
        let directive = issue_directive(guard, reading);
        *per_region.entry(directive.limits.region).or_insert(0) += 1;
        writeln!(out, "{}", directive.to_json_line()?)?;
    }
    Ok(per_region)
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    let config_path = matches
        .get_one::<PathBuf>("config")
        .context("--config is required")?;
    let readings_path = matches
        .get_one::<PathBuf>("readings")
        .context("--readings is required")?;

    let config = load_config(config_path, matches.get_flag("strict"))?;
    let guard = BeePolytopeGuard::from_config(config);
    let readings = load_readings(readings_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let per_region = run(&guard, &readings, &mut out)?;
    out.flush()?;

    for (region, count) in &per_region {
        info!(%region, count, "directives issued");
    }
    info!(total = readings.len(), "bee-guard run complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bee_core::{EnvironmentalState, HalfSpace, HazardParameters, Lc50References, MixtureWeights, Polytope};

    fn guard() -> BeePolytopeGuard {
        let hazard = HazardParameters {
            lc50: Lc50References {
                pm25_ug_m3: 100.0,
                nox_ppb: 100.0,
                o3_ppb: 100.0,
                voc_ug_m3: 100.0,
            },
            weights: MixtureWeights {
                w_pm25: 0.25,
                w_nox: 0.25,
                w_o3: 0.25,
                w_voc: 0.25,
            },
            pm25_eq_viability_ug_m3: 8.5,
        };
        let cap = |b| Polytope::new(vec![HalfSpace::new([1.0, 0.0, 0.0, 0.0, 0.0], b)]);
        BeePolytopeGuard::new(hazard, cap(12.0), cap(35.0), 0.3, 1.0)
    }

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn parse_readings_array() {
        let raw = r#"[
            { "node_id": "a", "state": { "pm25_ug_m3": 5.0, "nox_ppb": 0.0, "o3_ppb": 0.0, "temp_c": 20.0, "floral_m2_ha": 3.0 }, "voc_ug_m3": 1.0 },
            { "node_id": "b", "state": { "pm25_ug_m3": 50.0, "nox_ppb": 0.0, "o3_ppb": 0.0, "temp_c": 20.0, "floral_m2_ha": 3.0 } }
        ]"#;
        let readings = parse_readings(raw).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].voc_ug_m3, 0.0);
        assert!(parse_readings("{}").is_err());
    }

    #[test]
    fn run_writes_one_line_per_reading() {
        let readings: Vec<SensorReading> = [5.0, 20.0, 50.0]
            .iter()
            .enumerate()
            .map(|(i, pm25)| SensorReading {
                node_id: format!("node-{i}"),
                state: EnvironmentalState::new(*pm25, 0.0, 0.0, 20.0, 10.0),
                voc_ug_m3: 0.0,
            })
            .collect();

        let mut out = Vec::new();
        let per_region = run(&guard(), &readings, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 3);
        assert_eq!(per_region.get(&RegionClass::ForageSafe), Some(&1));
        assert_eq!(per_region.get(&RegionClass::RetreatOnly), Some(&1));
        assert_eq!(per_region.get(&RegionClass::Forbidden), Some(&1));
        assert!(text.lines().all(|l| serde_json::from_str::<serde_json::Value>(l).is_ok()));
    }
}
