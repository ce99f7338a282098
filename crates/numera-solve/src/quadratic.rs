//! Solving a·x² + b·x + c = 0 over the reals.

use crate::linear::{solve_linear, LinearSolution};

/// The real solution set of a quadratic equation a·x² + b·x + c = 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuadraticSolution {
    /// Positive discriminant: (−b+√D)/2a first, (−b−√D)/2a second.
    TwoRoots(f64, f64),
    /// Zero discriminant (double root reported once), or the single root
    /// of the reduced linear equation.
    OneRoot(f64),
    /// Negative discriminant, or an inconsistent reduced equation.
    NoRoots,
    /// All coefficients zero: every x satisfies the equation.
    Infinite,
}

impl QuadraticSolution {
    /// Number of real roots reported (0 for [`QuadraticSolution::NoRoots`]
    /// and [`QuadraticSolution::Infinite`]).
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            QuadraticSolution::TwoRoots(..) => 2,
            QuadraticSolution::OneRoot(_) => 1,
            QuadraticSolution::NoRoots | QuadraticSolution::Infinite => 0,
        }
    }

    /// The roots in reporting order.
    #[must_use]
    pub fn roots(self) -> Vec<f64> {
        match self {
            QuadraticSolution::TwoRoots(first, second) => vec![first, second],
            QuadraticSolution::OneRoot(x) => vec![x],
            QuadraticSolution::NoRoots | QuadraticSolution::Infinite => Vec::new(),
        }
    }
}

/// Solves a·x² + b·x + c = 0 over the reals.
///
/// A vanishing leading coefficient reduces the problem to
/// [`solve_linear`], whose outcome is reinterpreted as zero or one
/// roots. The discriminant boundary is exact floating-point zero; no
/// tolerance is applied.
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticSolution {
    if a == 0.0 {
        return match solve_linear(b, c) {
            LinearSolution::OneRoot(x) => QuadraticSolution::OneRoot(x),
            LinearSolution::NoSolution => QuadraticSolution::NoRoots,
            LinearSolution::Infinite => QuadraticSolution::Infinite,
        };
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        QuadraticSolution::NoRoots
    } else if disc == 0.0 {
        QuadraticSolution::OneRoot(-b / (2.0 * a))
    } else {
        let sqrt_disc = disc.sqrt();
        QuadraticSolution::TwoRoots(
            (-b + sqrt_disc) / (2.0 * a),
            (-b - sqrt_disc) / (2.0 * a),
        )
    }
}
