// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton's method with a fixed budget of accepted steps.
//!
//! Every pass computes `delta = f(x) / f'(x)` and moves `x` to
//! `x - delta`.  When `|delta|²` is at or above the divergence
//! threshold the pass is a retry: `x` still moves, but the step does
//! not count towards the budget.  The solver therefore keeps two
//! counters, accepted steps and total attempts, and stops as soon as
//! either hits its ceiling.  There is no early exit on convergence;
//! every point takes its full budget of accepted steps.
//!
//! A derivative that evaluates to exactly zero poisons `x` with NaN.
//! NaN never compares at or above the threshold, so such a run simply
//! burns through its budget and hands the NaN on to the classifier.

use complex::Complex;
use polynomial::Polynomial;
use settings::Settings;

/// What the solver found for one starting point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Solution {
    /// The approximate root.
    pub root: Complex,
    /// Every pass through the loop, retries included.  Only used for
    /// shading.
    pub iterations: usize,
}

/// Solver parameters.  Cheap to copy; holds no per-point state.
#[derive(Copy, Clone, Debug)]
pub struct NewtonSolver {
    steps: usize,
    divergence: f64,
    max_attempts: usize,
}

impl NewtonSolver {
    /// Constructor.  `max_attempts` is raised to `steps` if it is
    /// smaller, so a run can always complete its accepted steps when
    /// nothing diverges.
    pub fn new(steps: usize, divergence: f64, max_attempts: usize) -> NewtonSolver {
        NewtonSolver {
            steps,
            divergence,
            max_attempts: max_attempts.max(steps),
        }
    }

    /// Builds a solver from the render settings.
    pub fn from_settings(settings: &Settings) -> NewtonSolver {
        NewtonSolver::new(settings.steps, settings.divergence, settings.max_attempts)
    }

    /// The most passes any single solve may take.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Runs the iteration from `start`.  The caller is responsible for
    /// zero-avoidance of `start`.
    pub fn solve(&self, polynomial: &Polynomial, derivative: &Polynomial, start: Complex) -> Solution {
        let mut x = start;
        let mut accepted = 0;
        let mut attempts = 0;
        while accepted < self.steps && attempts < self.max_attempts {
            let delta = polynomial.evaluate(x).divide(derivative.evaluate(x));
            x = x.subtract(delta);
            attempts += 1;
            // NaN is never diverging.
            let diverging = delta.magnitude_squared() >= self.divergence;
            if !diverging {
                accepted += 1;
            }
        }
        if attempts > self.steps {
            trace!(
                "{} retried {} times before settling on {}",
                start,
                attempts - accepted,
                x
            );
        }
        Solution {
            root: x,
            iterations: attempts,
        }
    }
}

impl Default for NewtonSolver {
    fn default() -> NewtonSolver {
        NewtonSolver::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Zero;

    fn cubic() -> (Polynomial, Polynomial) {
        let p = Polynomial::newton_cubic();
        let d = p.derive();
        (p, d)
    }

    #[test]
    fn converges_on_a_cube_root_of_minus_one() {
        let (p, d) = cubic();
        let solution = NewtonSolver::default().solve(&p, &d, Complex::new(-0.9, 0.0001));
        assert!(solution.root.approx_eq(Complex::new(-1.0, 0.0), 1e-9));
        assert_eq!(solution.iterations, 30);
    }

    #[test]
    fn converges_on_the_complex_roots() {
        let (p, d) = cubic();
        let solver = NewtonSolver::default();
        let half = 0.5;
        let h = 3.0_f64.sqrt() / 2.0;
        let upper = solver.solve(&p, &d, Complex::new(0.6, 0.9));
        assert!(upper.root.approx_eq(Complex::new(half, h), 1e-9));
        let lower = solver.solve(&p, &d, Complex::new(0.6, -0.9));
        assert!(lower.root.approx_eq(Complex::new(half, -h), 1e-9));
    }

    #[test]
    fn divergent_steps_are_retried_without_spending_budget() {
        let (p, d) = cubic();
        // Starting this close to the origin the first step is enormous.
        let solution = NewtonSolver::default().solve(&p, &d, Complex::new(0.0001, 0.0001));
        assert!(solution.iterations > 30);
        assert!(solution.iterations <= 300);
        assert!(solution.root.is_finite());
        assert!((p.evaluate(solution.root)).magnitude_squared() < 1e-12);
    }

    #[test]
    fn attempts_are_capped_under_persistent_divergence() {
        // f(x) = x has f'(x) = 1; with a divergence threshold of zero
        // no step is ever accepted.
        let p = Polynomial::new(vec![Complex::zero(), Complex::real(1.0)]);
        let d = p.derive();
        let solver = NewtonSolver::new(30, 0.0, 120);
        let solution = solver.solve(&p, &d, Complex::new(5.0, 5.0));
        assert_eq!(solution.iterations, 120);
    }

    #[test]
    fn zero_derivative_propagates_nan() {
        let (p, d) = cubic();
        let solution = NewtonSolver::default().solve(&p, &d, Complex::zero());
        assert!(!solution.root.is_finite());
        assert_eq!(solution.iterations, 30);
    }

    #[test]
    fn attempt_ceiling_never_undercuts_steps() {
        assert_eq!(NewtonSolver::new(30, 0.5, 10).max_attempts(), 30);
        assert_eq!(NewtonSolver::default().max_attempts(), 300);
    }
}
