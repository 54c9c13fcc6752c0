//! Packer Solver Engine
//!
//! This crate provides the knapsack solvers behind every input line:
//! - [`ExhaustiveSolver`]: enumerates every subset as a bitmask
//! - [`DynamicProgrammingSolver`]: fills a table over item position and
//!   capacity in hundredths
//!
//! Both maximize total cost, then minimize total weight, then minimize the
//! item count, and break any remaining tie by preferring the selection that
//! contains the lower index at the first point of difference. For the same
//! instance they return the same [`Selection`](packer_core::Selection).

mod dynamic;
mod exhaustive;
mod solver;
mod subset;

#[cfg(test)]
mod tests;

pub use dynamic::DynamicProgrammingSolver;
pub use exhaustive::ExhaustiveSolver;
pub use packer_config::SolverType;
pub use solver::{build_solver, KnapsackSolver};
pub use subset::Subset;
