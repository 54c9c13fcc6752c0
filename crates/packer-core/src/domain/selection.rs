use std::fmt;

use crate::quantity::Hundredths;
use crate::score::PackingScore;

use super::Item;

/// The items chosen for one line, with derived totals.
///
/// Indexes are kept in ascending order. An empty selection renders as `-`.
///
/// # Examples
///
/// ```
/// use packer_core::{Hundredths, Item, Selection};
///
/// let items = [
///     Item::new(7, Hundredths::from_raw(6002), Hundredths::from_units(74)),
///     Item::new(2, Hundredths::from_raw(1455), Hundredths::from_units(74)),
/// ];
/// let selection = Selection::from_items(&items);
///
/// assert_eq!(selection.render(), "2,7");
/// assert_eq!(selection.total_cost(), Hundredths::from_units(148));
/// assert_eq!(Selection::empty().render(), "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    indexes: Vec<usize>,
    total_cost: Hundredths,
    total_weight: Hundredths,
}

impl Selection {
    /// Placeholder rendered for a selection without items.
    pub const EMPTY_RENDERING: &'static str = "-";

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a selection from the chosen items in any order.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut selection = Self::empty();
        for item in items {
            selection.indexes.push(item.index());
            selection.total_cost += item.cost();
            selection.total_weight += item.weight();
        }
        selection.indexes.sort_unstable();
        selection
    }

    #[inline]
    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    #[inline]
    pub fn total_cost(&self) -> Hundredths {
        self.total_cost
    }

    #[inline]
    pub fn total_weight(&self) -> Hundredths {
        self.total_weight
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    pub fn score(&self) -> PackingScore {
        PackingScore::of(self.total_cost, self.total_weight, self.indexes.len())
    }

    /// Renders the indexes joined by commas, or `-` when nothing was chosen.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.indexes.is_empty() {
            return f.write_str(Self::EMPTY_RENDERING);
        }
        for (position, index) in self.indexes.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}
