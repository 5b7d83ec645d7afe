use crate::types::{Coefficients, Position};

/// Euclidean distance between two positions.
#[inline]
pub fn distance(a: &Position, b: &Position) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// 12-6 Lennard-Jones potential with global well depth `epsilon` and size `sigma`:
/// `4ε((σ/r)^12 − (σ/r)^6)`.
#[inline]
pub fn lennard_jones(r: f64, epsilon: f64, sigma: f64) -> f64 {
    let sr6 = (sigma / r).powi(6);
    let sr12 = sr6 * sr6;
    4.0 * epsilon * (sr12 - sr6)
}

/// Geometric-mean mixing rule applied to both coefficients of a pair.
///
/// The rule is symmetric: `geometric_mix(a, b) == geometric_mix(b, a)`.
#[inline]
pub fn geometric_mix(a: &Coefficients, b: &Coefficients) -> Coefficients {
    Coefficients {
        c6: (a.c6 * b.c6).sqrt(),
        c12: (a.c12 * b.c12).sqrt(),
    }
}

/// Pair potential with explicit coefficients: `c12 / r^12 − c6 / r^6`.
#[inline]
pub fn c12_c6_potential(r: f64, mixed: &Coefficients) -> f64 {
    let r6 = r.powi(6);
    let r12 = r6 * r6;
    mixed.c12 / r12 - mixed.c6 / r6
}
