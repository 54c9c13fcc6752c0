//! Packer - picks the most valuable set of items that fits a weight limit.
//!
//! Each input line describes one independent problem: a capacity followed by
//! up to fifteen `(index,weight,€cost)` items. For every line the packer
//! chooses the subset with the highest total cost whose weight does not
//! exceed the capacity, preferring the lighter subset when costs are equal.
//!
//! # Example
//!
//! ```
//! use packer::{Packer, PackerConfig};
//!
//! let packer = Packer::new(&PackerConfig::default()).unwrap();
//! let output = packer
//!     .pack_str("8 : (1,15.3,€34)\n81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76)\n")
//!     .unwrap();
//! assert_eq!(output, "-\n4");
//! ```

mod error;
mod source;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

pub use error::{PackerError, Result};
pub use packer_config::{LimitsConfig, PackerConfig, SolverType};
pub use packer_core::{ParseError, ParseErrorKind, ProblemInstance, Selection};
pub use packer_parser::{LineParser, ParserLimits};
pub use packer_solver::{build_solver, KnapsackSolver};
pub use source::{LineSource, RawLine};

/// Parses, solves and renders input lines.
#[derive(Debug)]
pub struct Packer {
    parser: LineParser,
    solver: Box<dyn KnapsackSolver>,
    parallel: bool,
}

impl Packer {
    /// Creates a packer from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PackerError::Config`] if the configuration does not validate.
    pub fn new(config: &PackerConfig) -> Result<Self> {
        config.validate()?;
        let limits = ParserLimits::from_config(&config.limits)?;
        Ok(Packer {
            parser: LineParser::new(limits),
            solver: build_solver(config.solver.solver_type),
            parallel: config.parallel,
        })
    }

    /// Packs every line of the file at `path`.
    pub fn pack_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        info!(path = %path.display(), "Packing file");

        let io_error = |source: io::Error| PackerError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let lines = LineSource::new(BufReader::new(file)).map(|line| line.map_err(io_error));
        self.run(lines)
    }

    /// Packs every line read from `reader`.
    pub fn pack_reader<R: BufRead>(&self, reader: R) -> Result<String> {
        self.run(LineSource::new(reader).map(|line| line.map_err(PackerError::Read)))
    }

    /// Packs every line of `text`.
    pub fn pack_str(&self, text: &str) -> Result<String> {
        self.pack_reader(text.as_bytes())
    }

    /// Packs already split lines, numbering them from zero.
    ///
    /// Unlike [`pack_str`](Self::pack_str), blank lines are never dropped.
    pub fn pack_lines<I, S>(&self, lines: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines.into_iter().zip(0u64..).map(|(text, number)| {
            Ok(RawLine {
                number,
                text: text.into(),
            })
        });
        self.run(lines)
    }

    /// Parses every line, stopping at the first failure.
    pub fn parse_all<I>(&self, lines: I) -> Result<Vec<ProblemInstance>>
    where
        I: IntoIterator<Item = Result<RawLine>>,
    {
        lines
            .into_iter()
            .map(|line| -> Result<ProblemInstance> {
                let line = line?;
                Ok(self.parser.parse(line.number, &line.text)?)
            })
            .collect()
    }

    /// Solves every instance, keeping input order.
    pub fn solve_all(&self, instances: &[ProblemInstance]) -> Vec<Selection> {
        if self.parallel {
            instances
                .par_iter()
                .map(|instance| self.solver.solve(instance))
                .collect()
        } else {
            instances
                .iter()
                .map(|instance| self.solver.solve(instance))
                .collect()
        }
    }

    fn run<I>(&self, lines: I) -> Result<String>
    where
        I: IntoIterator<Item = Result<RawLine>>,
    {
        let instances = self.parse_all(lines)?;
        info!(
            lines = instances.len(),
            solver = self.solver.solver_type_name(),
            parallel = self.parallel,
            "Solving"
        );

        let selections = self.solve_all(&instances);
        for (line_number, (instance, selection)) in instances.iter().zip(&selections).enumerate() {
            debug!(
                line_number,
                capacity = %instance.capacity(),
                items = instance.len(),
                chosen = %selection,
                score = %selection.score(),
                "Packed line"
            );
        }

        let output = selections
            .iter()
            .map(Selection::render)
            .collect::<Vec<_>>()
            .join("\n");
        info!(lines = selections.len(), "Packing finished");
        Ok(output)
    }
}

/// Packs the file at `path` with the default configuration.
///
/// # Errors
///
/// Fails on the first malformed line, or if the file cannot be read.
pub fn pack(path: impl AsRef<Path>) -> Result<String> {
    Packer::new(&PackerConfig::default())?.pack_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = PackerConfig::new().with_limits(LimitsConfig {
            max_items: 0,
            ..LimitsConfig::default()
        });
        assert!(matches!(
            Packer::new(&config),
            Err(PackerError::Config(_))
        ));
    }

    #[test]
    fn test_pack_lines_keeps_blank_lines() {
        let packer = Packer::new(&PackerConfig::default()).unwrap();
        let err = packer.pack_lines(["8 : (1,15.3,€34)", ""]).unwrap_err();
        match err {
            PackerError::Parse(err) => assert_eq!(err.line_number, 1),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let packer = Packer::new(&PackerConfig::default()).unwrap();
        assert_eq!(packer.pack_str("").unwrap(), "");
    }
}
