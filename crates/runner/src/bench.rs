use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use super::config::Config;
use super::error::Error;
use common::error::Error as BenchError;
use lj_bench_core::{EnergyEvaluator, EnergyReport, Generator, OverlapFilter, UniformBoxSampler};

/// Everything a successful run measured.
#[derive(Debug, Clone, Copy)]
pub struct BenchOutcome {
    pub attempts: u64,
    pub energy: EnergyReport,
}

/// Runs placement, then the timed pairwise evaluation, writing the report to `out`.
///
/// Only the evaluation is inside the timed region. On a generation failure the
/// warning line is written and the error returned; nothing about energy is
/// written. A non-finite total is returned as an error, never printed.
pub fn run_benchmark<W: Write>(
    config: &Config,
    seed: u64,
    out: &mut W,
) -> Result<BenchOutcome, Error> {
    let generation = &config.generation;
    let model = config.potential.model();
    model.validate()?;

    let sampler = UniformBoxSampler::new(generation.box_size, model.uses_particle_coefficients())?;
    let filter = if generation.overlap_check {
        Some(OverlapFilter::new(generation.min_distance)?)
    } else {
        None
    };
    let generator = Generator::new(sampler, filter, generation.particles)?
        .with_attempts_per_particle(generation.attempts_per_particle)?;
    let evaluator = EnergyEvaluator::new(model)
        .with_distance_floor(config.potential.distance_floor(generation.overlap_check));

    info!(
        seed,
        particles = generation.particles,
        box_size = generation.box_size,
        min_distance = generation.min_distance,
        overlap_check = generation.overlap_check,
        budget = generator.attempt_budget(),
        "Starting particle placement."
    );

    let mut rng = StdRng::seed_from_u64(seed);

    writeln!(out, "Generating {} non-overlapping particles...", generation.particles)?;

    let generated = match generator.generate(&mut rng) {
        Ok(generated) => generated,
        Err(e @ BenchError::GenerationExhausted { generated, .. }) => {
            writeln!(
                out,
                "Warning: Could only generate {} particles without overlap",
                generated
            )?;
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    writeln!(
        out,
        "Generated {} particles (attempts: {})",
        generated.store.len(),
        generated.attempts
    )?;
    writeln!(out, "Starting benchmark...")?;

    let start_time = Instant::now();
    let energy = evaluator.evaluate(&generated.store)?;
    let elapsed = start_time.elapsed();
    info!(elapsed_s = elapsed.as_secs_f64(), "Pairwise evaluation timed.");

    let total_energy = black_box(energy.total_energy);

    writeln!(out, "Total Lennard-Jones energy: {:.6}", total_energy)?;
    writeln!(out, "Number of particles: {}", energy.particles)?;
    writeln!(out, "Number of interactions: {}", energy.interactions)?;
    writeln!(out, "Computation time: {:.3}", elapsed.as_secs_f64())?;

    Ok(BenchOutcome {
        attempts: generated.attempts,
        energy,
    })
}
