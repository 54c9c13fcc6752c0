//! Exhaustive search over every subset of the items.

use std::cmp::Ordering;

use packer_core::{PackingScore, ProblemInstance, Selection};
use tracing::trace;

use crate::solver::KnapsackSolver;
use crate::subset::Subset;

/// Enumerates all `2^N` subsets and keeps the best one.
///
/// With at most 16 items this is at most 65536 subsets per line. Subsets
/// over capacity are skipped; among equal scores the subset containing the
/// lowest differing index is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    pub fn new() -> Self {
        Self
    }
}

impl KnapsackSolver for ExhaustiveSolver {
    fn solve(&self, instance: &ProblemInstance) -> Selection {
        let capacity = instance.capacity();
        if capacity.is_zero() || instance.is_empty() {
            return Selection::empty();
        }

        let items = instance.items();
        let subset_count = 1u32 << items.len();
        let mut best = Subset::EMPTY;
        let mut best_score = PackingScore::ZERO;
        let mut feasible = 0u32;

        for bits in 1..subset_count {
            let subset = Subset::from_bits(bits as u16);
            let score = subset.score(items);
            if score.weight() > capacity {
                continue;
            }
            feasible += 1;
            let replace = match score.cmp(&best_score) {
                Ordering::Greater => true,
                Ordering::Equal => subset.wins_tie_against(best),
                Ordering::Less => false,
            };
            if replace {
                best = subset;
                best_score = score;
            }
        }

        trace!(
            subsets = subset_count,
            feasible,
            best = %best_score,
            "Exhaustive search finished"
        );

        best.to_selection(instance)
    }

    fn solver_type_name(&self) -> &'static str {
        "Exhaustive"
    }
}
