//! Exact solvers for two classic knapsack variants.
//!
//! A [`problem::Problem`] bundles a capacity with parallel weight and value
//! tables. [`solvers::fractional::GreedySolver`] solves the continuous
//! relaxation, where any fraction of an item may be taken, by ranking items
//! on value density. [`solvers::integral::DynamicSolver`] solves the 0/1
//! variant, where items are taken whole or not at all, by memoized dynamic
//! programming with a backtracking reconstruction of the chosen set.
//!
//! The [`solve_fractional`] and [`solve_integral`] entry points cover the
//! common case of solving a flat instance once:
//!
//! ```
//! let solution = knapsima::solve_integral(5, &[3], &[2]).unwrap();
//! assert!(solution.is_taken(0));
//! assert_eq!(solution.objective_value(), 2);
//! ```

pub mod problem;
pub mod solution;
pub mod solver;
pub mod solvers;

use crate::problem::{Error, Problem};
use crate::solution::{FractionalSolution, IntegralSolution};
use crate::solver::Solver;
use crate::solvers::fractional::GreedySolver;
use crate::solvers::integral::DynamicSolver;

/// Solve the continuous relaxation of the instance
/// `(capacity, weights, values)`.
///
/// Fails with [`Error::InvalidInstance`] when the slices have different
/// lengths.
pub fn solve_fractional(
    capacity: u64,
    weights: &[u64],
    values: &[u64],
) -> Result<FractionalSolution, Error> {
    let problem = Problem::new(capacity, weights, values)?;
    let mut solver = GreedySolver::new(&problem);
    Ok(solver.solve())
}

/// Solve the 0/1 variant of the instance `(capacity, weights, values)`.
///
/// Fails with [`Error::InvalidInstance`] when the slices have different
/// lengths.
pub fn solve_integral(
    capacity: u64,
    weights: &[u64],
    values: &[u64],
) -> Result<IntegralSolution, Error> {
    let problem = Problem::new(capacity, weights, values)?;
    let mut solver = DynamicSolver::new(&problem);
    Ok(solver.solve())
}
