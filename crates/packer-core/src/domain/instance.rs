use crate::error::InstanceError;
use crate::quantity::Hundredths;

use super::Item;

/// A validated knapsack problem: a capacity and an ordered list of items.
///
/// Item indexes always form the sequence `1, 2, ..., N` in declaration
/// order, and `N` never exceeds [`ProblemInstance::MAX_SUPPORTED_ITEMS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    capacity: Hundredths,
    items: Vec<Item>,
}

impl ProblemInstance {
    /// Largest item count a subset bitmask can address.
    pub const MAX_SUPPORTED_ITEMS: usize = 16;

    /// Creates an instance, checking the index sequence and the item count.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::IndexSequence`] for the first item whose
    /// index is not its 1-based position, and
    /// [`InstanceError::TooManyItems`] when there are more than
    /// [`Self::MAX_SUPPORTED_ITEMS`] items.
    pub fn new(capacity: Hundredths, items: Vec<Item>) -> Result<Self, InstanceError> {
        for (position, item) in items.iter().enumerate() {
            let expected = position + 1;
            if item.index() != expected {
                return Err(InstanceError::IndexSequence {
                    position,
                    expected,
                    found: item.index(),
                });
            }
        }
        if items.len() > Self::MAX_SUPPORTED_ITEMS {
            return Err(InstanceError::TooManyItems {
                count: items.len(),
                max: Self::MAX_SUPPORTED_ITEMS,
            });
        }
        Ok(ProblemInstance { capacity, items })
    }

    #[inline]
    pub fn capacity(&self) -> Hundredths {
        self.capacity
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> Hundredths {
        self.items.iter().map(Item::weight).sum()
    }
}
