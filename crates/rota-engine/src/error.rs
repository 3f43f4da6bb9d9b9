//! Error types for rota-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    #[error("Invalid time \"{0}\": expected HH:MM")]
    InvalidTime(String),

    #[error("Pattern \"{0}\" is missing fields required by its rule type")]
    IncompleteRule(String),

    #[error("Pattern \"{0}\" has no start date")]
    MissingStartDate(String),

    #[error("Pattern \"{0}\" produced a date outside the supported calendar range")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, RotaError>;
