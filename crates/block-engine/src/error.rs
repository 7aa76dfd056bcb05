//! Error types for block-engine operations.
//!
//! These are internal: both public core operations recover from every
//! variant and degrade to a conservative result instead of raising.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, BlockError>;
