//! Unified error types for the Longan library.
//!
//! This module provides a unified error type covering parsing and table
//! access, presenting a consistent API to users.
use std::fmt;
use thiserror::Error;

/// Axis a bounds or lookup failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A row of the grid
    Row,
    /// A column of the grid
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Turning raw text into a table failed irrecoverably
    #[error("Parse error in table '{table}': {reason}")]
    Parse { table: String, reason: String },

    /// Numeric index outside the current bounds
    #[error("{axis} index {index} out of range (0..{len})")]
    OutOfRange { axis: Axis, index: usize, len: usize },

    /// Name absent from the corresponding header or label lookup
    #[error("No {axis} named '{name}'")]
    LookupNotFound { axis: Axis, name: String },
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
