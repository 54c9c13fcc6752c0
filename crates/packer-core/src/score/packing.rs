//! PackingScore - Three-level score for knapsack selections

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use crate::domain::Item;
use crate::quantity::Hundredths;

/// Quality of a selection: total cost, total weight and item count.
///
/// When comparing scores:
/// 1. Higher cost is better
/// 2. At equal cost, lower weight is better
/// 3. At equal cost and weight, fewer items is better
///
/// The ordering is chosen so that a better score compares greater, which
/// lets solvers keep a running maximum.
///
/// # Examples
///
/// ```
/// use packer_core::{Hundredths, PackingScore};
///
/// let heavy = PackingScore::of(Hundredths::from_units(143), Hundredths::from_raw(5553), 2);
/// let light = PackingScore::of(Hundredths::from_units(143), Hundredths::from_raw(2612), 2);
///
/// assert!(light > heavy);
/// assert!(PackingScore::ZERO < light);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackingScore {
    cost: Hundredths,
    weight: Hundredths,
    items: usize,
}

impl PackingScore {
    /// The score of the empty selection.
    pub const ZERO: PackingScore = PackingScore {
        cost: Hundredths::ZERO,
        weight: Hundredths::ZERO,
        items: 0,
    };

    #[inline]
    pub const fn of(cost: Hundredths, weight: Hundredths, items: usize) -> Self {
        PackingScore {
            cost,
            weight,
            items,
        }
    }

    #[inline]
    pub const fn cost(&self) -> Hundredths {
        self.cost
    }

    #[inline]
    pub const fn weight(&self) -> Hundredths {
        self.weight
    }

    #[inline]
    pub const fn item_count(&self) -> usize {
        self.items
    }

    /// Returns the score after adding one more item.
    #[inline]
    pub fn with_item(self, item: &Item) -> Self {
        PackingScore {
            cost: self.cost + item.cost(),
            weight: self.weight + item.weight(),
            items: self.items + 1,
        }
    }

    /// Returns true if this score is strictly better than the other score.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }
}

impl Ord for PackingScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| other.weight.cmp(&self.weight))
            .then_with(|| other.items.cmp(&self.items))
    }
}

impl PartialOrd for PackingScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for PackingScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        PackingScore::of(
            self.cost + other.cost,
            self.weight + other.weight,
            self.items + other.items,
        )
    }
}

impl fmt::Debug for PackingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PackingScore({}, {}, {})",
            self.cost, self.weight, self.items
        )
    }
}

impl fmt::Display for PackingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}cost/{}weight/{}items",
            self.cost, self.weight, self.items
        )
    }
}
