//! Domain types for a single knapsack line.
//!
//! - [`Item`]: a candidate with index, weight and cost
//! - [`ProblemInstance`]: a capacity and its ordered items
//! - [`Selection`]: the chosen subset of a [`ProblemInstance`]

mod instance;
mod item;
mod selection;


pub use instance::ProblemInstance;
pub use item::Item;
pub use selection::Selection;
