//! Iterator implementations over table rows and columns

use super::table::Table;

/// Iterator over fresh copies of a table's rows.
pub struct Rows<'a> {
    table: &'a Table,
    row: usize,
}

impl<'a> Rows<'a> {
    pub(super) fn new(table: &'a Table) -> Self {
        Rows { table, row: 0 }
    }
}

impl Iterator for Rows<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Vec<String>> {
        if self.row >= self.table.height() {
            return None;
        }

        let row = (0..self.table.width())
            .map(|column| self.table.cell_at(column, self.row).to_string())
            .collect();
        self.row += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.height() - self.row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// Iterator over fresh copies of a table's columns.
pub struct Columns<'a> {
    table: &'a Table,
    column: usize,
}

impl<'a> Columns<'a> {
    pub(super) fn new(table: &'a Table) -> Self {
        Columns { table, column: 0 }
    }
}

impl Iterator for Columns<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Vec<String>> {
        if self.column >= self.table.width() {
            return None;
        }

        let column = (0..self.table.height())
            .map(|row| self.table.cell_at(self.column, row).to_string())
            .collect();
        self.column += 1;
        Some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.width() - self.column;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Columns<'_> {}
