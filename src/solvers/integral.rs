use std::collections::HashMap;

use log::debug;

use crate::problem::Problem;
use crate::solution::{integral_value, IntegralSolution};
use crate::solver::Solver;

/// 0/1 knapsack solver: top-down dynamic programming over
/// (item prefix, remaining capacity) states, followed by a backtracking
/// pass that reconstructs one optimal item set from the memo table.
#[derive(Debug)]
pub struct DynamicSolver {
    problem: Problem,

    // Instance data in recurrence-friendly form.
    weights: Vec<u64>,
    values: Vec<u64>,

    // Memoized m(i, w) values, scoped to a single solve call.
    memo: HashMap<(usize, u64), u64>,
}

impl DynamicSolver {
    pub fn new(problem: &Problem) -> DynamicSolver {
        let weights = problem.items().iter().map(|item| item.weight).collect();
        let values = problem.items().iter().map(|item| item.value).collect();

        DynamicSolver {
            problem: problem.clone(),
            weights,
            values,
            memo: HashMap::new(),
        }
    }

    /// Optimal value over the first `i` items with capacity `w`.
    ///
    /// The recurrence either skips item `i-1` or, when it fits, takes the
    /// better of skipping and taking it. Memoization bounds the recursion
    /// by the number of distinct `(i, w)` states actually visited.
    fn best_value(&mut self, i: usize, w: u64) -> u64 {
        if let Some(&cached) = self.memo.get(&(i, w)) {
            return cached;
        }

        let answer = if i == 0 {
            0
        } else if self.weights[i - 1] > w {
            self.best_value(i - 1, w)
        } else {
            let skip = self.best_value(i - 1, w);
            let take = self.best_value(i - 1, w - self.weights[i - 1]) + self.values[i - 1];
            skip.max(take)
        };

        self.memo.insert((i, w), answer);
        answer
    }
}

impl Solver for DynamicSolver {
    type Solution = IntegralSolution;

    fn solve(&mut self) -> IntegralSolution {
        let n = self.weights.len();
        let capacity = self.problem.capacity();

        let best = self.best_value(n, capacity);
        debug!(
            "found optimum {} over {} memoized states, {} items, capacity {}",
            best,
            self.memo.len(),
            n,
            capacity,
        );

        // Walk the memo back down: item i-1 is in the optimal set exactly
        // when taking it strictly beats the best value without it. Once the
        // remaining capacity hits zero only weightless items can still be
        // taken; everything else falls through the fit check and its choice
        // stays false.
        let mut choices = vec![false; n];
        let mut w = capacity;
        for i in (1..=n).rev() {
            let item_weight = self.weights[i - 1];
            if item_weight > w {
                continue;
            }
            let take = self.best_value(i - 1, w - item_weight) + self.values[i - 1];
            if take > self.best_value(i - 1, w) {
                choices[i - 1] = true;
                w -= item_weight;
            }
        }

        let objective_val = integral_value(&self.problem, &choices);
        debug_assert_eq!(best, objective_val);

        // The memo is per-invocation state; the next solve starts clean.
        self.memo.clear();

        IntegralSolution::new(choices, objective_val, capacity - w)
    }
}
