//! Longan - A Rust library for delimited text data tables
//!
//! This library reads comma-delimited text with quoted-field escaping into a
//! rectangular grid addressable by numeric index or by header label, and
//! serializes a grid back to the same textual format.
//!
//! # Features
//!
//! - **Single-pass parsing**: One forward scan turns raw text into a padded,
//!   rectangular cell grid
//! - **Quote handling**: Quoted fields with doubled-quote escapes, tolerant of
//!   unbalanced quotes at end of line
//! - **Comment and blank filtering**: `//` comment lines and whitespace-only
//!   lines contribute nothing to the grid
//! - **Name-keyed lookup**: Row 0 acts as a header row and column 0 as a label
//!   column, so cells can be addressed by name instead of index
//! - **Round-trip serialization**: `serialize` output parses back to an
//!   identical grid
//!
//! # Example - Parsing text
//!
//! ```
//! use longan::Table;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Table::from_text("items", "Name,Value\nSword,10\nShield,5\n")?;
//!
//! assert_eq!(table.width(), 2);
//! assert_eq!(table.height(), 3);
//!
//! // Address cells by index or by name
//! assert_eq!(table.cell(1, 1)?, "10");
//! assert_eq!(table.cell("Value", "Sword")?, "10");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a file
//!
//! ```no_run
//! use longan::Table;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Table name is derived from the file stem
//! let table = Table::open("data/items.csv")?;
//!
//! for row in table.rows() {
//!     println!("{:?}", row);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Typed import
//!
//! ```
//! use longan::{FromTable, ImportOptions, Result, Table};
//!
//! struct Prices(Vec<String>);
//!
//! impl FromTable for Prices {
//!     fn from_table(table: &Table, options: &ImportOptions) -> Result<Prices> {
//!         let column = options.get("column").unwrap_or("Value");
//!         Ok(Prices(table.column(column)?))
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let table = Table::from_text("items", "Name,Value\nSword,10\n")?;
//! let prices: Prices = table.import(&ImportOptions::new().with("column", "Value"))?;
//! assert_eq!(prices.0, vec!["Value", "10"]);
//! # Ok(())
//! # }
//! ```

/// Common types and utilities shared across the crate
///
/// This module provides the unified error type and result alias used by the
/// parsing and table APIs.
pub mod common;

/// Delimited text table parser and grid entity
///
/// This module provides the text-to-grid state machine and the `Table` type
/// with name-keyed lookup, serialization, and the typed-import seam.
pub mod table;

// Re-export commonly used types for convenience
pub use common::{Axis, Error, Result};
pub use table::{Columns, FromTable, ImportOptions, Rows, Selector, Table};
