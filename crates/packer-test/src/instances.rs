//! Problem instance fixtures.

use packer_core::{Hundredths, Item, PackingScore, ProblemInstance};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Creates a deterministic RNG for reproducible fixtures.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Builds an instance from `(weight, cost)` pairs in hundredths.
///
/// Items are indexed 1..N in the given order.
///
/// # Panics
///
/// Panics if more than [`ProblemInstance::MAX_SUPPORTED_ITEMS`] items are given.
pub fn instance(capacity: u64, items: &[(u64, u64)]) -> ProblemInstance {
    let items = items
        .iter()
        .enumerate()
        .map(|(position, &(weight, cost))| {
            Item::new(
                position + 1,
                Hundredths::from_raw(weight),
                Hundredths::from_raw(cost),
            )
        })
        .collect();
    ProblemInstance::new(Hundredths::from_raw(capacity), items)
        .expect("fixture items are indexed in order")
}

/// Generates a random instance with `item_count` items.
///
/// Weights and costs are drawn from a coarse grid so that equal-cost and
/// equal-weight subsets are common, which exercises tie-breaking.
pub fn random_instance<R: Rng>(rng: &mut R, item_count: usize) -> ProblemInstance {
    let capacity = rng.random_range(0..=40) * 250;
    let items: Vec<(u64, u64)> = (0..item_count)
        .map(|_| {
            let weight = rng.random_range(0..=20) * 500;
            let cost = rng.random_range(0..=10) * 1000;
            (weight, cost)
        })
        .collect();
    instance(capacity, &items)
}

/// Reference optimum computed by plain recursion over include/exclude.
pub fn best_score(instance: &ProblemInstance) -> PackingScore {
    fn explore(items: &[Item], remaining: Hundredths, acc: PackingScore) -> PackingScore {
        let Some((first, rest)) = items.split_first() else {
            return acc;
        };
        let skip = explore(rest, remaining, acc);
        match remaining.checked_sub(first.weight()) {
            Some(left) => skip.max(explore(rest, left, acc.with_item(first))),
            None => skip,
        }
    }

    if instance.capacity().is_zero() {
        return PackingScore::ZERO;
    }
    explore(instance.items(), instance.capacity(), PackingScore::ZERO)
}
