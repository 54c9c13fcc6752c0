//! Score type for comparing candidate selections
//!
//! A selection is judged by its total cost first (higher is better), then
//! its total weight (lower is better), then its item count (fewer is
//! better). Scores are immutable values ordered so that a better score
//! compares greater.

mod packing;


pub use packing::PackingScore;
