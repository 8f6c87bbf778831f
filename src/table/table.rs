//! Rectangular text table with name-keyed row and column lookup

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::iterators::{Columns, Rows};
use super::parser;
use super::selector::Selector;
use super::writer;
use crate::common::{Axis, Error, Result};

/// A named, immutable rectangular grid of text cells.
///
/// Row 0 acts as a header row and column 0 as a label column; both feed
/// name lookups built once at construction (first occurrence wins on
/// duplicates). The backing store is row-major and always holds exactly
/// `width * height` cells, short input rows having been padded with empty
/// strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    cells: Vec<String>,
    width: usize,
    column_lookup: HashMap<String, usize>,
    row_lookup: HashMap<String, usize>,
}

impl Table {
    /// Parse raw text into a table.
    ///
    /// Text with no surviving rows (only blank and comment lines) yields
    /// the empty table rather than an error.
    pub fn from_text(name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        let grid = parser::parse(text);

        // The parser guarantees rectangularity; a violation here means the
        // grid was corrupted before it reached us
        if grid.width > 0 && grid.cells.len() % grid.width != 0 {
            return Err(Error::Parse {
                table: name,
                reason: format!(
                    "{} cells do not fill rows of width {}",
                    grid.cells.len(),
                    grid.width
                ),
            });
        }

        Ok(Self::build(name, grid.cells, grid.width))
    }

    /// Build a table from a pre-split cell sequence and a column count.
    ///
    /// No parsing occurs, so this cannot fail: the tail is right-padded
    /// with empty cells until the sequence fills whole rows. A `width` of
    /// zero yields the empty table regardless of the cells passed in.
    pub fn from_cells(name: impl Into<String>, mut cells: Vec<String>, width: usize) -> Self {
        if width == 0 {
            cells.clear();
        } else {
            let remainder = cells.len() % width;
            if remainder != 0 {
                cells.resize(cells.len() + width - remainder, String::new());
            }
        }
        Self::build(name.into(), cells, width)
    }

    /// Read a file and parse it, naming the table after the file stem.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        Self::from_text(name, &text)
    }

    /// Write the serialized persistence format to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.serialize())?;
        Ok(())
    }

    fn build(name: String, cells: Vec<String>, width: usize) -> Self {
        let mut table = Table {
            name,
            cells,
            width,
            column_lookup: HashMap::new(),
            row_lookup: HashMap::new(),
        };
        table.rebuild_lookups();
        table
    }

    /// Rebuild both name lookups from the current contents.
    ///
    /// Lookups are derived data, rebuilt whole whenever contents are set;
    /// `or_insert` keeps the first occurrence on duplicate names.
    fn rebuild_lookups(&mut self) {
        self.column_lookup.clear();
        self.row_lookup.clear();
        if self.width == 0 || self.cells.is_empty() {
            return;
        }

        for (index, header) in self.cells[..self.width].iter().enumerate() {
            self.column_lookup.entry(header.clone()).or_insert(index);
        }
        for row in 0..self.height() {
            let label = &self.cells[row * self.width];
            self.row_lookup.entry(label.clone()).or_insert(row);
        }
    }

    /// Identifying label for the table, fixed at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        if self.width == 0 { 0 } else { self.cells.len() / self.width }
    }

    /// Whether the table holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Look up a single cell by column and row selector.
    ///
    /// Either selector may be a zero-based index or a name; names resolve
    /// through the header-row lookup (columns) or label-column lookup
    /// (rows). Fails with [`Error::OutOfRange`] for an index outside the
    /// grid and [`Error::LookupNotFound`] for an unknown name.
    pub fn cell<'a>(
        &self,
        column: impl Into<Selector<'a>>,
        row: impl Into<Selector<'a>>,
    ) -> Result<&str> {
        let column = self.resolve_column(column.into())?;
        let row = self.resolve_row(row.into())?;
        Ok(self.cell_at(column, row))
    }

    /// Copy out one row of `width` cells.
    pub fn row<'a>(&self, selector: impl Into<Selector<'a>>) -> Result<Vec<String>> {
        let row = self.resolve_row(selector.into())?;
        let start = row * self.width;
        Ok(self.cells[start..start + self.width].to_vec())
    }

    /// Copy out one column of `height` cells.
    pub fn column<'a>(&self, selector: impl Into<Selector<'a>>) -> Result<Vec<String>> {
        let column = self.resolve_column(selector.into())?;
        Ok((0..self.height())
            .map(|row| self.cells[row * self.width + column].clone())
            .collect())
    }

    /// Copy of the header row (row 0), the source of the column lookup.
    pub fn header(&self) -> Result<Vec<String>> {
        self.row(0)
    }

    /// Copy of the label column (column 0), the source of the row lookup.
    pub fn labels(&self) -> Result<Vec<String>> {
        self.column(0)
    }

    /// Whether a header with this text exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_lookup.contains_key(name)
    }

    /// Whether a row label with this text exists.
    pub fn has_row(&self, name: &str) -> bool {
        self.row_lookup.contains_key(name)
    }

    /// Iterate over fresh copies of every row.
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(self)
    }

    /// Iterate over fresh copies of every column.
    pub fn columns(&self) -> Columns<'_> {
        Columns::new(self)
    }

    /// Render the persistence format.
    ///
    /// Every cell is followed by a trailing comma, cells containing a comma
    /// or quote are escaped, rows are joined by newline. Parsing the output
    /// reproduces this table exactly; the `Display` rendering does not.
    pub fn serialize(&self) -> String {
        writer::serialize(self)
    }

    pub(super) fn cell_at(&self, column: usize, row: usize) -> &str {
        &self.cells[row * self.width + column]
    }

    fn resolve_column(&self, selector: Selector<'_>) -> Result<usize> {
        match selector {
            Selector::Index(index) if index < self.width => Ok(index),
            Selector::Index(index) => Err(Error::OutOfRange {
                axis: Axis::Column,
                index,
                len: self.width,
            }),
            Selector::Name(name) => {
                self.column_lookup
                    .get(name)
                    .copied()
                    .ok_or_else(|| Error::LookupNotFound {
                        axis: Axis::Column,
                        name: name.to_string(),
                    })
            },
        }
    }

    fn resolve_row(&self, selector: Selector<'_>) -> Result<usize> {
        match selector {
            Selector::Index(index) if index < self.height() => Ok(index),
            Selector::Index(index) => Err(Error::OutOfRange {
                axis: Axis::Row,
                index,
                len: self.height(),
            }),
            Selector::Name(name) => {
                self.row_lookup
                    .get(name)
                    .copied()
                    .ok_or_else(|| Error::LookupNotFound {
                        axis: Axis::Row,
                        name: name.to_string(),
                    })
            },
        }
    }
}

impl std::fmt::Display for Table {
    /// Human-readable rendering for diagnostics.
    ///
    /// Not the persistence format: embedded quotes are not doubled and
    /// columns are joined by `", "`. Use [`Table::serialize`] for output
    /// that parses back.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writer::display(self, f)
    }
}
