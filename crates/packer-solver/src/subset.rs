//! Item subsets as bitmasks.

use packer_core::{Item, PackingScore, ProblemInstance, Selection};

/// A subset of an instance's items, one bit per item position.
///
/// Bit `i` stands for the item at position `i`, which carries index `i + 1`.
///
/// # Examples
///
/// ```
/// use packer_solver::Subset;
///
/// let subset = Subset::EMPTY.with(0).with(2);
/// assert!(subset.contains(2));
/// assert_eq!(subset.positions().collect::<Vec<_>>(), vec![0, 2]);
///
/// // {1, 3} is preferred over {2, 3}: they first differ at position 0.
/// assert!(subset.wins_tie_against(Subset::from_bits(0b110)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Subset(u16);

impl Subset {
    pub const EMPTY: Subset = Subset(0);

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Subset(bits)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn contains(self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }

    #[inline]
    pub const fn with(self, position: usize) -> Self {
        Subset(self.0 | (1 << position))
    }

    /// Item positions in ascending order.
    pub fn positions(self) -> impl Iterator<Item = usize> {
        (0..u16::BITS as usize).filter(move |&position| self.contains(position))
    }

    /// Returns true if this subset contains the item at the lowest position
    /// where the two subsets differ.
    pub fn wins_tie_against(self, other: Subset) -> bool {
        let diff = self.0 ^ other.0;
        diff != 0 && self.0 & (diff & diff.wrapping_neg()) != 0
    }

    /// Score of the chosen items.
    pub fn score(self, items: &[Item]) -> PackingScore {
        self.positions()
            .fold(PackingScore::ZERO, |score, position| {
                score.with_item(&items[position])
            })
    }

    /// Materializes the chosen items of `instance`.
    pub fn to_selection(self, instance: &ProblemInstance) -> Selection {
        let items = instance.items();
        Selection::from_items(self.positions().map(|position| &items[position]))
    }
}
