//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Script file could not be opened
    #[error("Cannot open script {}: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Menu input errors (reported to the operator, never fatal)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// Input is not one of the numbered options
    #[error("Invalid menu choice: {0:?}")]
    InvalidChoice(String),
}
