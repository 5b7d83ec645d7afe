use rand::Rng;
use tracing::{debug, info, trace};

use super::overlap::OverlapFilter;
use super::store::ParticleStore;
use super::traits::ParticleSampler;
use common::error::Error;

/// Candidates allowed per target particle before placement gives up.
pub const DEFAULT_ATTEMPTS_PER_PARTICLE: u64 = 1000;

/// Result of a completed generation run.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The full store, exactly `target` particles.
    pub store: ParticleStore,
    /// Number of candidates drawn, accepted or not.
    pub attempts: u64,
}

/// Rejection-sampling placement loop.
///
/// Draws candidates from `sampler` and keeps those accepted by `filter`
/// until the store holds `target` particles or the attempt budget
/// `target × attempts_per_particle` is spent. Without a filter every
/// candidate is accepted.
pub struct Generator<S> {
    sampler: S,
    filter: Option<OverlapFilter>,
    target: usize,
    attempts_per_particle: u64,
}

impl<S> Generator<S>
where
    S: ParticleSampler,
{
    /// # Errors
    /// Returns `Error::InvalidParameter` if `target` is zero.
    pub fn new(sampler: S, filter: Option<OverlapFilter>, target: usize) -> Result<Self, Error> {
        if target == 0 {
            return Err(Error::invalid("particles", "must be at least 1"));
        }
        Ok(Generator {
            sampler,
            filter,
            target,
            attempts_per_particle: DEFAULT_ATTEMPTS_PER_PARTICLE,
        })
    }

    /// # Errors
    /// Returns `Error::InvalidParameter` if `attempts_per_particle` is zero.
    pub fn with_attempts_per_particle(mut self, attempts_per_particle: u64) -> Result<Self, Error> {
        if attempts_per_particle == 0 {
            return Err(Error::invalid("attempts_per_particle", "must be at least 1"));
        }
        self.attempts_per_particle = attempts_per_particle;
        Ok(self)
    }

    pub fn attempt_budget(&self) -> u64 {
        (self.target as u64).saturating_mul(self.attempts_per_particle)
    }

    /// Runs the placement loop to completion.
    ///
    /// Every draw counts as an attempt. The loop finishes as soon as the store
    /// is full, so a store that fills on the last budgeted attempt succeeds.
    ///
    /// # Errors
    /// Returns `Error::GenerationExhausted` when the budget runs out first. The
    /// partially filled store is dropped.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Generated, Error> {
        let budget = self.attempt_budget();
        let mut store = ParticleStore::with_capacity(self.target);
        let mut attempts: u64 = 0;

        while !store.is_full() {
            if attempts >= budget {
                debug!(
                    generated = store.len(),
                    target = self.target,
                    attempts,
                    "Attempt budget exhausted."
                );
                return Err(Error::GenerationExhausted {
                    generated: store.len(),
                    target: self.target,
                    attempts,
                });
            }

            let candidate = self.sampler.sample(rng);
            attempts += 1;

            let accepted = self
                .filter
                .as_ref()
                .is_none_or(|filter| filter.accepts(&candidate, &store));

            if accepted {
                store.push(candidate)?;
                trace!(n_generated = store.len(), attempts, "Candidate accepted.");
            }
        }

        info!(
            particles = store.len(),
            attempts,
            "Particle placement complete."
        );

        Ok(Generated { store, attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::UniformBoxSampler;
    use common::numeric_kernel::distance;
    use common::types::Particle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    /// Replays a fixed list of positions, cycling when it runs out.
    struct ScriptedSampler {
        script: Vec<[f64; 3]>,
        cursor: Cell<usize>,
    }

    impl ScriptedSampler {
        fn new(script: Vec<[f64; 3]>) -> Self {
            Self {
                script,
                cursor: Cell::new(0),
            }
        }
    }

    impl ParticleSampler for ScriptedSampler {
        fn sample<R: Rng>(&self, _rng: &mut R) -> Particle {
            let i = self.cursor.get();
            self.cursor.set(i + 1);
            Particle::at(self.script[i % self.script.len()])
        }
    }

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn counts_rejected_attempts() {
        // Second and third candidates overlap the first.
        let sampler = ScriptedSampler::new(vec![
            [0.0, 0.0, 0.0],
            [0.1, 0.0, 0.0],
            [0.0, 0.2, 0.0],
            [2.0, 0.0, 0.0],
        ]);
        let generator = Generator::new(sampler, Some(OverlapFilter::new(1.0).unwrap()), 2).unwrap();

        let generated = generator.generate(&mut seeded()).unwrap();
        assert_eq!(generated.attempts, 4);
        assert_eq!(generated.store.len(), 2);
        assert_eq!(generated.store.as_slice()[1].position, [2.0, 0.0, 0.0]);
    }

    #[test]
    fn exhausts_budget_when_every_candidate_overlaps() {
        let sampler = ScriptedSampler::new(vec![[1.0, 1.0, 1.0]]);
        let generator = Generator::new(sampler, Some(OverlapFilter::new(0.5).unwrap()), 3)
            .unwrap()
            .with_attempts_per_particle(10)
            .unwrap();

        let err = generator.generate(&mut seeded()).unwrap_err();
        assert_eq!(
            err,
            Error::GenerationExhausted {
                generated: 1,
                target: 3,
                attempts: 30,
            }
        );
    }

    /// Filling the store on the very last budgeted attempt is a success.
    #[test]
    fn fills_on_last_budgeted_attempt() {
        let sampler = ScriptedSampler::new(vec![[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]]);
        let generator = Generator::new(sampler, Some(OverlapFilter::new(1.0).unwrap()), 2)
            .unwrap()
            .with_attempts_per_particle(1)
            .unwrap();
        assert_eq!(generator.attempt_budget(), 2);

        let generated = generator.generate(&mut seeded()).unwrap();
        assert_eq!(generated.attempts, 2);
        assert!(generated.store.is_full());
    }

    #[test]
    fn one_rejection_too_many_fails() {
        // The third candidate would fit but the budget of 2 is already spent.
        let sampler = ScriptedSampler::new(vec![[0.0, 0.0, 0.0], [0.5, 0.0, 0.0], [5.0, 0.0, 0.0]]);
        let generator = Generator::new(sampler, Some(OverlapFilter::new(1.0).unwrap()), 2)
            .unwrap()
            .with_attempts_per_particle(1)
            .unwrap();

        assert!(matches!(
            generator.generate(&mut seeded()),
            Err(Error::GenerationExhausted {
                generated: 1,
                target: 2,
                attempts: 2
            })
        ));
    }

    #[test]
    fn without_filter_every_candidate_is_accepted() {
        let sampler = ScriptedSampler::new(vec![[0.0, 0.0, 0.0]]);
        let generator = Generator::new(sampler, None, 5).unwrap();
        let generated = generator.generate(&mut seeded()).unwrap();
        assert_eq!(generated.attempts, 5);
        assert!(generated.store.is_full());
    }

    #[test]
    fn sparse_box_fills_and_respects_min_distance() {
        let sampler = UniformBoxSampler::new(100.0, true).unwrap();
        let generator = Generator::new(sampler, Some(OverlapFilter::new(0.5).unwrap()), 4).unwrap();

        let generated = generator.generate(&mut seeded()).unwrap();
        assert_eq!(generated.store.len(), 4);
        assert!(generated.attempts >= 4);

        let particles = generated.store.as_slice();
        for i in 0..particles.len() {
            for j in i + 1..particles.len() {
                assert!(distance(&particles[i].position, &particles[j].position) >= 0.5);
            }
        }
    }

    #[test]
    fn impossible_density_fails() {
        let sampler = UniformBoxSampler::new(1.0, true).unwrap();
        let generator =
            Generator::new(sampler, Some(OverlapFilter::new(1000.0).unwrap()), 2).unwrap();

        match generator.generate(&mut seeded()) {
            Err(Error::GenerationExhausted {
                generated,
                target,
                attempts,
            }) => {
                assert_eq!(generated, 1);
                assert_eq!(target, 2);
                assert_eq!(attempts, 2_000);
            }
            other => panic!("expected GenerationExhausted, got {:?}", other),
        }
    }

    #[test]
    fn same_seed_same_store() {
        let build = || {
            let sampler = UniformBoxSampler::new(6.0, true).unwrap();
            Generator::new(sampler, Some(OverlapFilter::new(1.0).unwrap()), 40).unwrap()
        };

        let a = build().generate(&mut StdRng::seed_from_u64(9)).unwrap();
        let b = build().generate(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.attempts, b.attempts);
        assert_eq!(a.store.as_slice(), b.store.as_slice());
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let sampler = UniformBoxSampler::new(1.0, false).unwrap();
        assert!(Generator::new(sampler.clone(), None, 0).is_err());
        assert!(
            Generator::new(sampler, None, 1)
                .unwrap()
                .with_attempts_per_particle(0)
                .is_err()
        );
    }
}
