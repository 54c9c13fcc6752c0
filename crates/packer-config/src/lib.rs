//! Configuration system for Packer.
//!
//! Load the input bounds and solver choice from TOML or YAML files
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use packer_config::{PackerConfig, SolverType};
//!
//! let config = PackerConfig::from_toml_str(r#"
//!     parallel = true
//!
//!     [limits]
//!     max_items = 10
//!     max_capacity = 250
//!
//!     [solver]
//!     solver_type = "exhaustive"
//! "#).unwrap();
//!
//! assert_eq!(config.limits.max_items, 10);
//! assert_eq!(config.solver.solver_type, SolverType::Exhaustive);
//! assert!(config.parallel);
//! ```
//!
//! Fall back to the defaults when no file is present:
//!
//! ```
//! use packer_config::PackerConfig;
//!
//! let config = PackerConfig::load("packer.toml").unwrap_or_default();
//! assert_eq!(config.limits.max_items, 15);
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("malformed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Largest item count any solver supports (one bit per item in a `u16`).
pub const MAX_SUPPORTED_ITEMS: usize = 16;

/// Upper limit for the configurable numeric bounds, in whole units.
pub const MAX_BOUND: u32 = 1000;

/// Main packer configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PackerConfig {
    /// Bounds applied while parsing input lines.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Solver selection.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Solve lines on a thread pool, keeping output order.
    #[serde(default)]
    pub parallel: bool,
}

impl PackerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, everything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML/YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the solver type.
    pub fn with_solver_type(mut self, solver_type: SolverType) -> Self {
        self.solver.solver_type = solver_type;
        self
    }

    /// Enables or disables parallel solving.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Replaces the parsing limits.
    pub fn with_limits(mut self, limits: LimitsConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Checks that the configuration can be honored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `max_items` is zero or above
    /// [`MAX_SUPPORTED_ITEMS`], or when a bound is negative, above
    /// [`MAX_BOUND`], or has more than two fractional digits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()
    }
}

/// Bounds applied to every input line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LimitsConfig {
    /// Maximum number of items (and therefore the maximum index) per line.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Maximum capacity of a line.
    #[serde(default = "default_bound")]
    pub max_capacity: Decimal,

    /// Maximum weight of a single item.
    #[serde(default = "default_bound")]
    pub max_weight: Decimal,

    /// Maximum cost of a single item.
    #[serde(default = "default_bound")]
    pub max_cost: Decimal,
}

fn default_max_items() -> usize {
    15
}

fn default_bound() -> Decimal {
    Decimal::ONE_HUNDRED
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            max_items: default_max_items(),
            max_capacity: default_bound(),
            max_weight: default_bound(),
            max_cost: default_bound(),
        }
    }
}

impl LimitsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_items == 0 || self.max_items > MAX_SUPPORTED_ITEMS {
            return Err(ConfigError::Invalid(format!(
                "max_items must be between 1 and {}, got {}",
                MAX_SUPPORTED_ITEMS, self.max_items
            )));
        }
        for (name, bound) in [
            ("max_capacity", self.max_capacity),
            ("max_weight", self.max_weight),
            ("max_cost", self.max_cost),
        ] {
            if bound.is_sign_negative() || bound > Decimal::from(MAX_BOUND) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 0 and {}, got {}",
                    name, MAX_BOUND, bound
                )));
            }
            if bound.normalize().scale() > 2 {
                return Err(ConfigError::Invalid(format!(
                    "{} must have at most 2 fractional digits, got {}",
                    name, bound
                )));
            }
        }
        Ok(())
    }
}

/// Solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Which algorithm solves each line.
    #[serde(default)]
    pub solver_type: SolverType,
}

/// Knapsack solving strategies. Both return identical selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverType {
    /// Enumerate every subset of the items.
    Exhaustive,

    /// Table over item position and capacity in hundredths.
    #[default]
    DynamicProgramming,
}

impl std::fmt::Display for SolverType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverType::Exhaustive => write!(f, "Exhaustive"),
            SolverType::DynamicProgramming => write!(f, "DynamicProgramming"),
        }
    }
}
