use std::path::PathBuf;
use thiserror::Error;

/// Errors from the roster-loading layer.
///
/// The core tree API has no error type of its own: aggregate queries
/// and child mutation are total. Everything that can go wrong happens
/// while turning a roster document into a tree.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("roster file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read roster: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("invalid roster format in {path}: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("negative amount for {name}: {amount}")]
    NegativeAmount { name: String, amount: f64 },

    #[error("institution name must not be empty")]
    EmptyInstitutionName,

    #[error("no node named: {0}")]
    UnknownNode(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
