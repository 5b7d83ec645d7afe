use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ModelKind};

pub const DEFAULT_SEED: u64 = 42;

/// Lennard-Jones pairwise energy benchmark over non-overlapping random particles.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Seed for the pseudo-random placement sequence.
    #[arg(value_name = "SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// TOML configuration file (defaults to ./Config.toml, then ./crates/runner/Config.toml).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of particles to place.
    #[arg(short = 'n', long, value_name = "N")]
    pub particles: Option<usize>,

    /// Edge length of the cubic placement box.
    #[arg(long, value_name = "LENGTH")]
    pub box_size: Option<f64>,

    /// Minimum allowed distance between two particles.
    #[arg(long, value_name = "DISTANCE")]
    pub min_distance: Option<f64>,

    /// Pair potential used for the energy sum.
    #[arg(long, value_enum, value_name = "MODEL")]
    pub potential: Option<ModelKind>,

    /// Place particles without the minimum-distance check.
    #[arg(long)]
    pub no_overlap_check: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(particles) = self.particles {
            config.generation.particles = particles;
        }
        if let Some(box_size) = self.box_size {
            config.generation.box_size = box_size;
        }
        if let Some(min_distance) = self.min_distance {
            config.generation.min_distance = min_distance;
        }
        if let Some(model) = self.potential {
            config.potential.model = model;
        }
        if self.no_overlap_check {
            config.generation.overlap_check = false;
        }
    }
}
