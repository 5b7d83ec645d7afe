use common::error::Error;
use common::numeric_kernel::distance;
use common::types::Particle;

use super::store::ParticleStore;

/// Minimum-distance constraint between a candidate and every stored particle.
#[derive(Debug, Clone, Copy)]
pub struct OverlapFilter {
    min_distance: f64,
}

impl OverlapFilter {
    /// # Errors
    /// Returns `Error::InvalidParameter` if `min_distance` is not positive and finite.
    pub fn new(min_distance: f64) -> Result<Self, Error> {
        if !min_distance.is_finite() || min_distance <= 0.0 {
            return Err(Error::invalid(
                "min_distance",
                format!("must be a positive finite number, got {}", min_distance),
            ));
        }
        Ok(Self { min_distance })
    }

    /// Returns `true` iff `candidate` is at least `min_distance` away from every
    /// particle in `store`. Stops at the first overlap; an empty store always accepts.
    pub fn accepts(&self, candidate: &Particle, store: &ParticleStore) -> bool {
        store
            .iter()
            .all(|p| distance(&candidate.position, &p.position) >= self.min_distance)
    }
}
