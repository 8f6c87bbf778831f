//! Unified error types for the Longan library.
//!
//! This module provides a unified error type covering parsing and table
//! access, presenting a consistent API to users.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Axis, Error, Result};
