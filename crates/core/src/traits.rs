use common::types::Particle;
use rand::Rng;

/// Trait for sources of candidate particles used by the generation loop.
pub trait ParticleSampler {
    /// Draws one candidate particle, consuming generator state.
    ///
    /// Implementations must be deterministic in `rng`: the same generator
    /// state always yields the same candidate.
    fn sample<R: Rng>(&self, rng: &mut R) -> Particle;
}
