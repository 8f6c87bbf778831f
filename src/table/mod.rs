//! Delimited text data tables
//!
//! This module provides the text-to-grid parser and the [`Table`] entity
//! built on top of it.
//!
//! # Features
//!
//! - **Single-pass parsing**: One forward scan per line with an explicit
//!   cursor and a growable output buffer
//! - **Rectangular grids**: Short rows are right-padded so the cell store
//!   is always `width * height`
//! - **Name-keyed lookup**: Header row and label column feed lookups built
//!   once at construction, first occurrence winning on duplicates
//! - **Round-trip serialization**: [`Table::serialize`] output parses back
//!   to an identical grid
//!
//! # Example
//!
//! ```
//! use longan::table::Table;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Table::from_text("items", "Name,Value\nSword,10\nShield,5\n")?;
//!
//! // Row looked up by the column-0 label, column by the row-0 header
//! assert_eq!(table.cell("Value", "Sword")?, "10");
//!
//! // Fresh copies, never views into the table
//! let sword = table.row("Sword")?;
//! assert_eq!(sword, vec!["Sword", "10"]);
//! # Ok(())
//! # }
//! ```

// Submodule declarations
pub mod import;
pub mod iterators;
pub mod parser;
pub mod selector;
mod table;
mod writer;

// Re-exports
pub use import::{FromTable, ImportOptions};
pub use iterators::{Columns, Rows};
pub use parser::{RawGrid, parse};
pub use selector::Selector;
pub use table::Table;
