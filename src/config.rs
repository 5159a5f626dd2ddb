//! Engine and runtime configuration.
//!
//! The engine treats the region table, the mount names and the narrative
//! corpus as read-only configuration supplied at startup: compiled-in
//! defaults, overridable from a JSON file with the same shape. The runtime
//! config drives the demo binary only.

use crate::analysis::RegionTable;
use crate::narrative::NarrativeCorpus;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The six traditional mounts named in the feature report.
const DEFAULT_MOUNT_NAMES: [&str; 6] = [
    "jupiter", "saturn", "apollo", "mercury", "venus", "luna",
];

/// Static configuration the engine reads but never writes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EngineConfig {
    pub regions: RegionTable,
    pub mount_names: Vec<String>,
    pub corpus: NarrativeCorpus,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            regions: RegionTable::default(),
            mount_names: DEFAULT_MOUNT_NAMES.iter().map(|s| s.to_string()).collect(),
            corpus: NarrativeCorpus::default(),
        }
    }
}

/// Load an engine configuration from a JSON file; omitted sections keep
/// their compiled-in defaults.
pub fn load_engine_config(path: &Path) -> Result<EngineConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

/// Command-line configuration for the demo binary.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub json_out: Option<PathBuf>,
    pub seed: Option<u64>,
    pub engine_config: Option<PathBuf>,
}

/// Parse the demo binary's arguments.
pub fn parse_cli(program: &str) -> Result<RunConfig, String> {
    parse_args(program, std::env::args().skip(1))
}

fn parse_args(
    program: &str,
    args: impl IntoIterator<Item = String>,
) -> Result<RunConfig, String> {
    let usage =
        format!("Usage: {program} <image> [--json <path>] [--seed <n>] [--config <path>]");
    let mut input_path = None;
    let mut json_out = None;
    let mut seed = None;
    let mut engine_config = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => {
                let value = iter.next().ok_or_else(|| usage.clone())?;
                json_out = Some(PathBuf::from(value));
            }
            "--seed" => {
                let value = iter.next().ok_or_else(|| usage.clone())?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|e| format!("Invalid --seed value {value:?}: {e}"))?,
                );
            }
            "--config" => {
                let value = iter.next().ok_or_else(|| usage.clone())?;
                engine_config = Some(PathBuf::from(value));
            }
            other if input_path.is_none() && !other.starts_with('-') => {
                input_path = Some(PathBuf::from(other));
            }
            other => return Err(format!("Unexpected argument {other:?}\n{usage}")),
        }
    }

    Ok(RunConfig {
        input_path: input_path.ok_or(usage)?,
        json_out,
        seed,
        engine_config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_config_names_six_mounts() {
        let config = EngineConfig::default();
        assert_eq!(config.mount_names.len(), 6);
    }

    #[test]
    fn engine_config_round_trips_through_json() {
        let config = EngineConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mount_names, config.mount_names);
        assert!((back.regions.mid_band.y - config.regions.mid_band.y).abs() < 1e-6);
    }

    #[test]
    fn region_table_serializes_with_kebab_case_keys() {
        let json = serde_json::to_value(RegionTable::default()).unwrap();
        for key in ["primary-curve", "upper-band", "mid-band", "central-band"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn cli_parses_input_and_flags() {
        let config = parse_args(
            "palm_reader",
            strings(&["hand.png", "--json", "out.json", "--seed", "7"]),
        )
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from("hand.png"));
        assert_eq!(config.json_out, Some(PathBuf::from("out.json")));
        assert_eq!(config.seed, Some(7));
        assert!(config.engine_config.is_none());
    }

    #[test]
    fn cli_requires_an_input_path() {
        assert!(parse_args("palm_reader", strings(&[])).is_err());
    }

    #[test]
    fn cli_rejects_unknown_flags() {
        assert!(parse_args("palm_reader", strings(&["hand.png", "--wat"])).is_err());
    }
}
