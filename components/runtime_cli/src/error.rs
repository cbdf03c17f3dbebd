//! Error types for the CLI

use std::path::PathBuf;

use class_loader::ConfigError;
use core_types::RuntimeError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading, construction, or decoding failed in the runtime
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// The configuration file could not be used
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An input file could not be read
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing command output failed
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
