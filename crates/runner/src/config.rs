use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;
use lj_bench_core::generator::DEFAULT_ATTEMPTS_PER_PARTICLE;
use lj_bench_core::{EnergyEvaluator, PotentialModel};

/// Prefix of environment overrides, e.g. `LJ_BENCH_GENERATION__PARTICLES=500`.
pub const ENV_PREFIX: &str = "LJ_BENCH";

const DEFAULT_CONFIG_FILE: &str = "Config.toml";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Uniform,
    #[default]
    Mixed,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    pub particles: usize,
    pub box_size: f64,
    pub min_distance: f64,
    pub attempts_per_particle: u64,
    pub overlap_check: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            particles: 2000,
            box_size: 40.0,
            min_distance: 0.9,
            attempts_per_particle: DEFAULT_ATTEMPTS_PER_PARTICLE,
            overlap_check: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PotentialConfig {
    pub model: ModelKind,
    pub epsilon: f64,
    pub sigma: f64,
    pub distance_floor: Option<f64>,
}

impl Default for PotentialConfig {
    fn default() -> Self {
        PotentialConfig {
            model: ModelKind::default(),
            epsilon: PotentialModel::DEFAULT_EPSILON,
            sigma: PotentialModel::DEFAULT_SIGMA,
            distance_floor: None,
        }
    }
}

impl PotentialConfig {
    pub fn model(&self) -> PotentialModel {
        match self.model {
            ModelKind::Uniform => PotentialModel::Uniform {
                epsilon: self.epsilon,
                sigma: self.sigma,
            },
            ModelKind::Mixed => PotentialModel::Mixed,
        }
    }

    /// Explicit floor if configured, otherwise `0.1` for unchecked placement
    /// and none when overlaps are already excluded.
    pub fn distance_floor(&self, overlap_check: bool) -> Option<f64> {
        match self.distance_floor {
            Some(floor) => Some(floor),
            None if overlap_check => None,
            None => Some(EnergyEvaluator::UNCHECKED_DISTANCE_FLOOR),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,
    pub potential: PotentialConfig,
}

impl Config {
    /// Checks values the core types do not validate on construction.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(floor) = self.potential.distance_floor {
            if !floor.is_finite() || floor < 0.0 {
                return Err(Error::ConfigLoadError(format!(
                    "potential.distance_floor must be a non-negative finite number, got {}",
                    floor
                )));
            }
        }
        Ok(())
    }
}

/// Loads configuration from defaults, an optional TOML file and environment variables.
///
/// With `path` the file must exist. Without it the first `Config.toml` found
/// by [`default_config_path`] is used, and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    let file = match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigLoadError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            Some(File::from(path).required(true))
        }
        None => {
            let base_path = env::current_dir().map_err(|e| {
                Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
            })?;
            default_config_path(&base_path).map(|p| File::from(p).required(true))
        }
    };

    build_config(file, env_source())
}

/// `Config.toml` in `base_path`, else `crates/runner/Config.toml` under it so a
/// run from the workspace root picks up the documented defaults.
pub fn default_config_path(base_path: &Path) -> Option<PathBuf> {
    [
        base_path.join(DEFAULT_CONFIG_FILE),
        base_path
            .join("crates")
            .join("runner")
            .join(DEFAULT_CONFIG_FILE),
    ]
    .into_iter()
    .find(|candidate| candidate.is_file())
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build_config<F>(file: Option<F>, env: Environment) -> Result<Config, Error>
where
    F: config::Source + Send + Sync + 'static,
{
    let mut builder = ConfigLoader::builder();
    if let Some(file) = file {
        builder = builder.add_source(file);
    }

    let s = builder
        .add_source(env)
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    app_config.validate()?;
    Ok(app_config)
}
