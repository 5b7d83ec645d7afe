use tracing::{debug, warn};

use super::potential::PotentialModel;
use super::store::ParticleStore;
use common::error::Error;
use common::numeric_kernel::{distance, lennard_jones};
use common::types::{Particle, pair_count};

/// Outcome of a pairwise evaluation.
///
/// Fields:
/// - `total_energy`: sum of the pair potential over every evaluated pair.
/// - `particles`: store size `N`.
/// - `interactions`: pairs considered, always `N·(N−1)/2`.
/// - `skipped_pairs`: pairs at or below the distance floor, excluded from the sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub total_energy: f64,
    pub particles: usize,
    pub interactions: u64,
    pub skipped_pairs: u64,
}

impl EnergyReport {
    /// Number of pair potentials actually computed.
    pub fn evaluated_pairs(&self) -> u64 {
        self.interactions - self.skipped_pairs
    }
}

/// All-pairs energy evaluator for one potential model.
///
/// Pairs are visited in ascending `i`, then ascending `j > i`. The
/// accumulation order is fixed so totals are bit-reproducible for a given
/// store.
#[derive(Debug, Clone, Copy)]
pub struct EnergyEvaluator {
    model: PotentialModel,
    distance_floor: Option<f64>,
}

impl EnergyEvaluator {
    /// Distance floor applied when placement does not enforce a minimum distance.
    pub const UNCHECKED_DISTANCE_FLOOR: f64 = 0.1;

    pub fn new(model: PotentialModel) -> Self {
        Self {
            model,
            distance_floor: None,
        }
    }

    /// Skips (and counts) every pair with `r <= floor`.
    pub fn with_distance_floor(mut self, floor: Option<f64>) -> Self {
        self.distance_floor = floor;
        self
    }

    /// Sums the pair potential over every unordered pair of `store`.
    ///
    /// # Errors
    /// Returns `Error::IncompleteStore` if `store` is not full, and
    /// `Error::NonFiniteEnergy` if the sum overflows or a pair sits at `r = 0`.
    pub fn evaluate(&self, store: &ParticleStore) -> Result<EnergyReport, Error> {
        if !store.is_full() {
            return Err(Error::IncompleteStore {
                len: store.len(),
                capacity: store.capacity(),
            });
        }

        let particles = store.as_slice();
        let (total_energy, skipped_pairs) = match self.model {
            PotentialModel::Uniform { epsilon, sigma } => {
                accumulate(particles, self.distance_floor, |_, _, r| {
                    lennard_jones(r, epsilon, sigma)
                })
            }
            PotentialModel::Mixed => {
                accumulate(particles, self.distance_floor, PotentialModel::mixed_energy)
            }
        };

        let interactions = pair_count(particles.len());
        if skipped_pairs > 0 {
            warn!(
                skipped_pairs,
                floor = self.distance_floor,
                "Pairs at or below the distance floor were left out of the total energy."
            );
        }
        debug!(interactions, skipped_pairs, total_energy, "Pairwise evaluation done.");

        if !total_energy.is_finite() {
            return Err(Error::NonFiniteEnergy(total_energy));
        }

        Ok(EnergyReport {
            total_energy,
            particles: particles.len(),
            interactions,
            skipped_pairs,
        })
    }
}

/// Walks the upper triangle of the pair matrix, returning `(sum, skipped)`.
///
/// The model is matched once by the caller so the inner loop is monomorphized
/// per potential.
#[inline]
fn accumulate<F>(particles: &[Particle], floor: Option<f64>, pair_energy: F) -> (f64, u64)
where
    F: Fn(&Particle, &Particle, f64) -> f64,
{
    let mut total = 0.0f64;
    let mut skipped = 0u64;

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let r = distance(&a.position, &b.position);
            if floor.is_some_and(|floor| r <= floor) {
                skipped += 1;
                continue;
            }
            total += pair_energy(a, b, r);
        }
    }

    (total, skipped)
}
