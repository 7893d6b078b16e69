use std::cmp::Ordering;

use log::debug;

use crate::problem::{Item, Problem};
use crate::solution::{fractional_value, FractionalSolution};
use crate::solver::Solver;

/// Greedy solver for the continuous relaxation of the knapsack problem.
///
/// Items are ranked by value density and taken in rank order until the
/// capacity runs out, so only the last item taken can be cut at the
/// boundary. The usual exchange argument makes this optimal for the
/// relaxation: swapping any taken unit for an untaken one never raises the
/// total value.
#[derive(Debug)]
pub struct GreedySolver {
    problem: Problem,

    // Instance items reordered by rank during solve.
    ranked: Vec<Item>,
}

/// Orders denser items first without leaving integer arithmetic: the
/// densities `value/weight` are compared by cross-multiplication, promoted
/// to `u128` so `u64` inputs cannot overflow. A zero-weight item with
/// positive value beats every positively-weighted item (the rival product
/// is zero). Equal densities fall back to input order.
fn density_rank(x: &Item, y: &Item) -> Ordering {
    let lhs = x.value as u128 * y.weight as u128;
    let rhs = y.value as u128 * x.weight as u128;
    rhs.cmp(&lhs).then_with(|| x.index.cmp(&y.index))
}

impl GreedySolver {
    pub fn new(problem: &Problem) -> GreedySolver {
        GreedySolver {
            problem: problem.clone(),
            ranked: problem.items().to_vec(),
        }
    }
}

impl Solver for GreedySolver {
    type Solution = FractionalSolution;

    fn solve(&mut self) -> FractionalSolution {
        self.ranked.sort_unstable_by(density_rank);
        debug!("ranked {} items by value density", self.ranked.len());

        let mut amounts = vec![0; self.problem.len()];
        let mut remaining = self.problem.capacity();
        for item in &self.ranked {
            if remaining == 0 {
                break;
            }
            let take = item.weight.min(remaining);
            amounts[item.index] = take;
            remaining -= take;
        }

        let weight = self.problem.capacity() - remaining;
        let objective_val = fractional_value(&self.problem, &amounts);
        debug!(
            "greedy fill done, obj.: {}, weight {} of {}",
            objective_val,
            weight,
            self.problem.capacity(),
        );

        FractionalSolution::new(amounts, objective_val, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_item_fully_taken() {
        let problem = Problem::new(5, &[3], &[2]).unwrap();
        let solution = GreedySolver::new(&problem).solve();

        assert_eq!(solution.amounts(), &[3]);
        assert_eq!(solution.objective_value(), 2.0);
        assert_eq!(solution.weight(), 3);
    }

    #[test]
    fn oversized_item_cut_at_capacity() {
        let problem = Problem::new(5, &[9], &[9]).unwrap();
        let solution = GreedySolver::new(&problem).solve();

        assert_eq!(solution.amounts(), &[5]);
        assert_eq!(solution.objective_value(), 5.0);
        assert_eq!(solution.weight(), 5);
    }

    #[test]
    fn zero_capacity_takes_nothing() {
        let problem = Problem::new(0, &[3, 4], &[6, 8]).unwrap();
        let solution = GreedySolver::new(&problem).solve();

        assert_eq!(solution.amounts(), &[0, 0]);
        assert_eq!(solution.objective_value(), 0.0);
        assert_eq!(solution.weight(), 0);
    }

    #[test]
    fn densest_items_are_taken_first() {
        let problem = Problem::new(5, &[3, 4, 5, 1, 9], &[6, 8, 13, 3, 9]).unwrap();
        let solution = GreedySolver::new(&problem).solve();

        // Density order is item 3 (3.0), item 2 (2.6), items 0 and 1 (2.0),
        // item 4 (1.0); items 3 and 2 exhaust the capacity.
        assert_eq!(solution.amounts(), &[0, 0, 4, 1, 0]);
        assert!((solution.objective_value() - 13.4).abs() < 1e-9);
        assert_eq!(solution.weight(), 5);
    }

    #[test]
    fn density_ties_resolve_by_input_order() {
        // Both items have density 3/2; the lower index wins the tie.
        let problem = Problem::new(4, &[2, 4], &[3, 6]).unwrap();
        let solution = GreedySolver::new(&problem).solve();

        assert_eq!(solution.amounts(), &[2, 2]);
        assert_eq!(solution.objective_value(), 6.0);
    }

    #[test]
    fn weightless_item_ranks_first() {
        let problem = Problem::new(3, &[0, 3], &[5, 6]).unwrap();
        let solution = GreedySolver::new(&problem).solve();

        // The weightless item consumes no capacity, so its take cannot show
        // up in amounts; its value is still credited in full.
        assert_eq!(solution.amounts(), &[0, 3]);
        assert_eq!(solution.objective_value(), 11.0);
        assert_eq!(solution.weight(), 3);
    }
}
