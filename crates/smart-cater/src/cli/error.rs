//! Error types for the command-line front end.

use crate::service::ServiceError;
use thiserror::Error;

/// Errors that end a CLI run.
///
/// Ordinary failures (unknown meal, bad date) are shown to the user and the
/// session continues; only terminal I/O problems and an unrecoverable store
/// reach this type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from stdin or writing to stdout failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A service operation failed in a way the demo cannot continue past.
    #[error(transparent)]
    Service(#[from] ServiceError),
}
