use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The attempt budget ran out before the store reached its target size.
    #[error(
        "Generation exhausted after {attempts} attempts: placed {generated} of {target} particles."
    )]
    GenerationExhausted {
        generated: usize,
        target: usize,
        attempts: u64,
    },

    /// Pair evaluation was requested on a store that has not been filled.
    #[error("Particle store holds {len} of {capacity} particles; a full store is required.")]
    IncompleteStore { len: usize, capacity: usize },

    /// The pairwise sum overflowed or hit a zero separation.
    #[error("Total energy is not finite ({0}); particles are too close for the pair potential.")]
    NonFiniteEnergy(f64),

    /// A particle was pushed into a store that is already at capacity.
    #[error("Particle store is full (capacity {0}).")]
    StoreFull(usize),

    /// A benchmark parameter is outside its valid domain.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl Error {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
