//! CLI-level errors (wraps roster errors)

use thiserror::Error;

use crate::errors::RosterError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Roster(#[from] RosterError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Roster(e) => match e {
                RosterError::FileNotFound(_) => crate::exitcode::NOINPUT,
                RosterError::FileReadError(_) => crate::exitcode::IOERR,
                RosterError::InvalidFormat { .. }
                | RosterError::NegativeAmount { .. }
                | RosterError::EmptyInstitutionName => crate::exitcode::DATAERR,
                RosterError::UnknownNode(_) => crate::exitcode::USAGE,
            },
        }
    }
}
