use common::error::Error;
use common::types::Particle;

/// Fixed-capacity, insertion-ordered collection of accepted particles.
///
/// The particles live in a single contiguous allocation sized once for the
/// target count, so the pairwise scan walks memory sequentially:
/// - `particles[i]` → the `i`-th accepted particle (acceptance order)
/// - `capacity` → the target particle count `N`
///
/// Particles are only ever appended; there is no way to mutate or remove a
/// stored particle.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    capacity: usize,
}

impl ParticleStore {
    /// Creates an empty store able to hold exactly `capacity` particles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an accepted particle.
    ///
    /// # Errors
    /// Returns `Error::StoreFull` if the store already holds `capacity` particles.
    pub fn push(&mut self, particle: Particle) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::StoreFull(self.capacity));
        }
        self.particles.push(particle);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.particles.len() == self.capacity
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }
}
