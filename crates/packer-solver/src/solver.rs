//! Solver trait and factory.

use std::fmt::Debug;

use packer_config::SolverType;
use packer_core::{ProblemInstance, Selection};

use crate::{DynamicProgrammingSolver, ExhaustiveSolver};

/// Chooses the best [`Selection`] for a [`ProblemInstance`].
///
/// Implementations must be deterministic: the same instance always yields
/// the same selection.
pub trait KnapsackSolver: Send + Sync + Debug {
    fn solve(&self, instance: &ProblemInstance) -> Selection;

    /// Returns the solver type name for logging.
    fn solver_type_name(&self) -> &'static str;
}

/// Creates the solver for the configured [`SolverType`].
pub fn build_solver(solver_type: SolverType) -> Box<dyn KnapsackSolver> {
    match solver_type {
        SolverType::Exhaustive => Box::new(ExhaustiveSolver::new()),
        SolverType::DynamicProgramming => Box::new(DynamicProgrammingSolver::new()),
    }
}
