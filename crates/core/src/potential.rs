use common::error::Error;
use common::numeric_kernel::{c12_c6_potential, distance, geometric_mix, lennard_jones};
use common::types::Particle;

/// Pair potential selected at configuration time.
///
/// - `Uniform`: one global 12-6 Lennard-Jones potential, `4ε((σ/r)^12 − (σ/r)^6)`.
///   Per-particle coefficients are ignored.
/// - `Mixed`: per-pair coefficients from the geometric-mean mixing rule,
///   `c12_ij / r^12 − c6_ij / r^6`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PotentialModel {
    Uniform { epsilon: f64, sigma: f64 },
    #[default]
    Mixed,
}

impl PotentialModel {
    pub const DEFAULT_EPSILON: f64 = 1.0;
    pub const DEFAULT_SIGMA: f64 = 1.0;

    /// Uniform model with `ε = σ = 1`.
    pub fn uniform() -> Self {
        PotentialModel::Uniform {
            epsilon: Self::DEFAULT_EPSILON,
            sigma: Self::DEFAULT_SIGMA,
        }
    }

    /// # Errors
    /// Returns `Error::InvalidParameter` if `epsilon` or `sigma` is not positive and finite.
    pub fn validate(&self) -> Result<(), Error> {
        if let PotentialModel::Uniform { epsilon, sigma } = *self {
            if !epsilon.is_finite() || epsilon <= 0.0 {
                return Err(Error::invalid(
                    "epsilon",
                    format!("must be a positive finite number, got {}", epsilon),
                ));
            }
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(Error::invalid(
                    "sigma",
                    format!("must be a positive finite number, got {}", sigma),
                ));
            }
        }
        Ok(())
    }

    /// Whether candidates for this model need their own `c6`/`c12` draws.
    pub fn uses_particle_coefficients(&self) -> bool {
        matches!(self, PotentialModel::Mixed)
    }

    /// Energy of the pair `(a, b)` separated by `r`.
    #[inline]
    pub fn energy_at(&self, a: &Particle, b: &Particle, r: f64) -> f64 {
        match *self {
            PotentialModel::Uniform { epsilon, sigma } => lennard_jones(r, epsilon, sigma),
            PotentialModel::Mixed => Self::mixed_energy(a, b, r),
        }
    }

    /// Mixed-model energy of `(a, b)` at separation `r`.
    #[inline]
    pub fn mixed_energy(a: &Particle, b: &Particle, r: f64) -> f64 {
        c12_c6_potential(r, &geometric_mix(&a.coefficients, &b.coefficients))
    }

    /// Energy of the pair `(a, b)` at their current separation.
    pub fn pair_energy(&self, a: &Particle, b: &Particle) -> f64 {
        self.energy_at(a, b, distance(&a.position, &b.position))
    }
}
