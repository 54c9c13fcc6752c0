use std::fmt;

use crate::quantity::Hundredths;

/// A candidate item of one input line.
///
/// Indexes are 1-based and unique within their [`ProblemInstance`](super::ProblemInstance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    index: usize,
    weight: Hundredths,
    cost: Hundredths,
}

impl Item {
    pub const fn new(index: usize, weight: Hundredths, cost: Hundredths) -> Self {
        Item {
            index,
            weight,
            cost,
        }
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn weight(&self) -> Hundredths {
        self.weight
    }

    #[inline]
    pub const fn cost(&self) -> Hundredths {
        self.cost
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},€{})", self.index, self.weight, self.cost)
    }
}
