//! Shared test fixtures for Packer crates.
//!
//! This crate provides data and pure functions for testing.
//! It only depends on `packer-core` so the parser and solver crates can use
//! it as a dev-dependency without cycles.
//!
//! - [`scenarios`] - Input lines with their expected renderings
//! - [`instances`] - Hand-built and seeded random problem instances
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! packer-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use packer_test::scenarios::{SOLVED, SAMPLE_INPUT};
//! use packer_test::instances::{random_instance, seeded_rng};
//! ```

pub mod instances;
pub mod scenarios;

pub use instances::{best_score, instance, random_instance, seeded_rng};
pub use scenarios::{Scenario, SAMPLE_INPUT, SAMPLE_OUTPUT, SOLVED};
