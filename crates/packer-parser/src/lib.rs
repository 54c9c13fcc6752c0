//! Line grammar and validation for Packer.
//!
//! A line reads `<capacity> : (<index>,<weight>,€<cost>) ...`. The
//! [`LineParser`] either returns a fully validated
//! [`ProblemInstance`](packer_core::ProblemInstance) or a
//! [`ParseError`](packer_core::ParseError) naming the line and the reason.

mod parser;
mod scanner;


pub use parser::{LineParser, ParserLimits};
