//! Packer Core - Core types for knapsack line solving
//!
//! This crate provides the fundamental abstractions shared by the parser,
//! the solvers and the driver:
//! - [`Hundredths`] fixed-point quantities for weights, costs and capacities
//! - Domain types ([`Item`], [`ProblemInstance`], [`Selection`])
//! - The [`PackingScore`] used to compare candidate selections
//! - Error types for parsing and instance construction

pub mod domain;
pub mod error;
pub mod quantity;
pub mod score;

pub use domain::{Item, ProblemInstance, Selection};
pub use error::{Field, InstanceError, ParseError, ParseErrorKind};
pub use quantity::Hundredths;
pub use score::PackingScore;
