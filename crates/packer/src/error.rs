//! Errors surfaced by the driver.

use std::io;
use std::path::PathBuf;

use packer_config::ConfigError;
use packer_core::ParseError;
use thiserror::Error;

/// Any failure while packing an input.
///
/// Every variant is fatal: the first malformed line stops the run and no
/// partial output is produced.
#[derive(Debug, Error)]
pub enum PackerError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from a stream that has no path.
    #[error("cannot read input: {0}")]
    Read(#[source] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, PackerError>;
