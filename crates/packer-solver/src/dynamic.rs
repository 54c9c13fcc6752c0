//! Dynamic programming over item position and capacity.

use packer_core::{Hundredths, PackingScore, ProblemInstance, Selection};
use tracing::trace;

use crate::solver::KnapsackSolver;
use crate::subset::Subset;

/// Solves lines with a table of best scores.
///
/// `table[i][c]` holds the best [`PackingScore`] reachable with the items
/// from position `i` onwards and `c` hundredths of capacity. The selection
/// is rebuilt front to back, taking each item whenever an optimal completion
/// still exists with it, which prefers lower indexes on ties.
///
/// Capacity is clamped to the total item weight, so the table never has
/// more than `(N + 1) * (min(capacity, total weight) + 1)` cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgrammingSolver;

impl DynamicProgrammingSolver {
    pub fn new() -> Self {
        Self
    }
}

/// Row-major `(items + 1) x (capacity + 1)` table of scores.
struct ScoreTable {
    width: usize,
    cells: Vec<PackingScore>,
}

impl ScoreTable {
    fn new(rows: usize, width: usize) -> Self {
        ScoreTable {
            width,
            cells: vec![PackingScore::ZERO; rows * width],
        }
    }

    #[inline]
    fn get(&self, row: usize, capacity: usize) -> PackingScore {
        self.cells[row * self.width + capacity]
    }

    #[inline]
    fn set(&mut self, row: usize, capacity: usize, score: PackingScore) {
        self.cells[row * self.width + capacity] = score;
    }
}

impl KnapsackSolver for DynamicProgrammingSolver {
    fn solve(&self, instance: &ProblemInstance) -> Selection {
        if instance.capacity().is_zero() || instance.is_empty() {
            return Selection::empty();
        }

        let items = instance.items();
        let n = items.len();
        let capacity = raw_usize(instance.capacity().min(instance.total_weight()));
        let weights: Vec<usize> = items.iter().map(|item| raw_usize(item.weight())).collect();

        // Row n stays ZERO: no items left.
        let mut table = ScoreTable::new(n + 1, capacity + 1);
        for i in (0..n).rev() {
            for c in 0..=capacity {
                let skip = table.get(i + 1, c);
                let best = if weights[i] <= c {
                    let take = table.get(i + 1, c - weights[i]).with_item(&items[i]);
                    skip.max(take)
                } else {
                    skip
                };
                table.set(i, c, best);
            }
        }

        let mut chosen = Subset::EMPTY;
        let mut remaining = capacity;
        for i in 0..n {
            let target = table.get(i, remaining);
            if weights[i] <= remaining
                && table
                    .get(i + 1, remaining - weights[i])
                    .with_item(&items[i])
                    == target
            {
                chosen = chosen.with(i);
                remaining -= weights[i];
            }
        }

        trace!(
            cells = table.cells.len(),
            best = %table.get(0, capacity),
            "Dynamic programming finished"
        );

        chosen.to_selection(instance)
    }

    fn solver_type_name(&self) -> &'static str {
        "DynamicProgramming"
    }
}

/// Capacities are bounded by configuration, so hundredths always fit.
fn raw_usize(value: Hundredths) -> usize {
    value.raw() as usize
}
