use std::ops::Range;

use rand::Rng;

use super::traits::ParticleSampler;
use common::error::Error;
use common::types::{Coefficients, Particle};

/// Interval the per-particle `c6` and `c12` coefficients are drawn from.
pub const COEFFICIENT_RANGE: Range<f64> = 0.5..1.5;

/// Draws candidate particles uniformly inside the cube `[0, box_size)^3`.
///
/// Draw order per candidate is fixed: `x`, `y`, `z`, then `c6` and `c12`
/// when coefficients are drawn. Without coefficient draws every candidate
/// carries unit coefficients and only three values are consumed.
#[derive(Debug, Clone)]
pub struct UniformBoxSampler {
    box_size: f64,
    draw_coefficients: bool,
}

impl UniformBoxSampler {
    /// # Errors
    /// Returns `Error::InvalidParameter` unless `box_size` is finite and positive.
    pub fn new(box_size: f64, draw_coefficients: bool) -> Result<Self, Error> {
        if !box_size.is_finite() || box_size <= 0.0 {
            return Err(Error::invalid(
                "box_size",
                format!("must be a positive finite number, got {}", box_size),
            ));
        }
        Ok(Self {
            box_size,
            draw_coefficients,
        })
    }
}

impl ParticleSampler for UniformBoxSampler {
    fn sample<R: Rng>(&self, rng: &mut R) -> Particle {
        let position = [
            rng.random_range(0.0..self.box_size),
            rng.random_range(0.0..self.box_size),
            rng.random_range(0.0..self.box_size),
        ];

        let coefficients = if self.draw_coefficients {
            Coefficients {
                c6: rng.random_range(COEFFICIENT_RANGE),
                c12: rng.random_range(COEFFICIENT_RANGE),
            }
        } else {
            Coefficients::UNIT
        };

        Particle::new(position, coefficients)
    }
}
