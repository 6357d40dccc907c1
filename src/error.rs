use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Result returning Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors. Lookups of absent keys and deletes of absent keys are not errors, they are reported
/// as None/false by the store itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Error {
    Config(String),
    Internal(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Config(s) | Error::Internal(s) => write!(f, "{}", s),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Error::Internal(err.to_string())
    }
}
