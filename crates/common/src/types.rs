/// Cartesian position of a particle: `[x, y, z]`.
pub type Position = [f64; 3];

/// Per-particle dispersion/repulsion coefficients.
///
/// Fields:
/// - `c6`: strength of the attractive `r^-6` term.
/// - `c12`: strength of the repulsive `r^-12` term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub c6: f64,
    pub c12: f64,
}

impl Coefficients {
    /// Coefficients carried by particles of the uniform-potential variant.
    pub const UNIT: Coefficients = Coefficients { c6: 1.0, c12: 1.0 };
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::UNIT
    }
}

/// A simulated particle: a point in space plus its interaction coefficients.
///
/// Particles are plain values. Once a particle has been accepted into a
/// store it is never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Position,
    pub coefficients: Coefficients,
}

impl Particle {
    pub fn new(position: Position, coefficients: Coefficients) -> Self {
        Self {
            position,
            coefficients,
        }
    }

    /// Particle at `position` with unit coefficients.
    pub fn at(position: Position) -> Self {
        Self::new(position, Coefficients::UNIT)
    }

    pub fn c6(&self) -> f64 {
        self.coefficients.c6
    }

    pub fn c12(&self) -> f64 {
        self.coefficients.c12
    }
}

/// Number of unordered pairs `N·(N−1)/2` among `n` particles.
pub fn pair_count(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_count_matches_closed_form() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(4), 6);
        assert_eq!(pair_count(17_000), 144_491_500);
    }

    #[test]
    fn at_uses_unit_coefficients() {
        let p = Particle::at([1.0, 2.0, 3.0]);
        assert_eq!(p.c6(), 1.0);
        assert_eq!(p.c12(), 1.0);
        assert_eq!(p.position, [1.0, 2.0, 3.0]);
    }
}
