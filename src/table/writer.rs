//! Serialization and display rendering for tables

use std::fmt;

use super::table::Table;

/// Render the persistence format.
///
/// Every cell is followed by a trailing comma, including the last cell of
/// a row; the parser tolerates a missing trailing comma, so the write
/// format is deliberately more verbose than what the read format requires.
/// Rows are joined by newline.
pub(super) fn serialize(table: &Table) -> String {
    let mut out = String::new();
    for row in 0..table.height() {
        if row > 0 {
            out.push('\n');
        }
        for column in 0..table.width() {
            push_escaped(&mut out, table.cell_at(column, row));
            out.push(',');
        }
    }
    out
}

/// Quote-wrap a cell that contains a delimiter or quote, doubling embedded
/// quotes first.
fn push_escaped(out: &mut String, cell: &str) {
    if cell.contains(',') || cell.contains('"') {
        let escaped = cell.replace('"', "\"\"");
        out.push('"');
        out.push_str(&escaped);
        out.push('"');
    } else {
        out.push_str(cell);
    }
}

/// Diagnostic rendering behind `Display`.
///
/// Cells containing a comma are wrapped in quotes without doubling,
/// columns are joined by `", "`. Not a round-trip format.
pub(super) fn display(table: &Table, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in 0..table.height() {
        if row > 0 {
            f.write_str("\n")?;
        }
        for column in 0..table.width() {
            if column > 0 {
                f.write_str(", ")?;
            }
            let cell = table.cell_at(column, row);
            if cell.contains(',') {
                write!(f, "\"{}\"", cell)?;
            } else {
                f.write_str(cell)?;
            }
        }
    }
    Ok(())
}
