//! Single-pass parser for delimited text tables

use memchr::memchr2;

/// Flat, rectangular parse result: row-major cells plus the grid width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    /// Row-major cell values; length is an exact multiple of `width`
    pub cells: Vec<String>,
    /// Number of columns, taken from the widest surviving row
    pub width: usize,
}

impl RawGrid {
    /// Number of rows in the grid.
    pub fn height(&self) -> usize {
        if self.width == 0 { 0 } else { self.cells.len() / self.width }
    }
}

/// Parse raw text into a padded, rectangular cell grid.
///
/// Rules are applied in order: CRLF and lone CR normalize to LF, tabs fold
/// to single spaces, the text splits into lines, blank lines (nothing but
/// commas and whitespace) and `//` comment lines are discarded, each
/// surviving line splits into cells under quote rules, and every row is
/// right-padded with empty cells to the widest row's cell count.
///
/// Zero surviving rows yield the empty grid (width 0, no cells).
pub fn parse(text: &str) -> RawGrid {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut width = 0;

    for line in Lines::new(text) {
        if is_comment(line) || is_blank(line) {
            continue;
        }
        let cells = split_cells(line);
        width = width.max(cells.len());
        rows.push(cells);
    }

    let mut cells = Vec::with_capacity(width * rows.len());
    for mut row in rows {
        row.resize(width, String::new());
        cells.append(&mut row);
    }

    RawGrid { cells, width }
}

/// A comment line starts with `//` in its first two columns; leading
/// whitespace is not trimmed before the check.
fn is_comment(line: &str) -> bool {
    line.as_bytes().starts_with(b"//")
}

/// A line with nothing left after removing commas and whitespace is blank.
/// Tabs count as the spaces they fold to.
fn is_blank(line: &str) -> bool {
    line.bytes().all(|byte| matches!(byte, b',' | b' ' | b'\t'))
}

/// Split one line into cells with a one-flag quote state machine.
///
/// Outside quotes a `"` enters quote mode and a `,` closes the current
/// cell. Inside quotes a doubled `""` emits one literal quote and a single
/// `"` exits quote mode; delimiters are taken literally.
fn split_cells(line: &str) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut cells = Vec::new();
    let mut buffer: Vec<u8> = Vec::new();
    let mut in_quotes = false;
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        if in_quotes {
            if byte == b'"' {
                if bytes.get(pos + 1) == Some(&b'"') {
                    // Doubled quote, one literal quote
                    buffer.push(b'"');
                    pos += 2;
                    continue;
                }
                in_quotes = false;
            } else {
                buffer.push(fold_tab(byte));
            }
        } else {
            match byte {
                b'"' => in_quotes = true,
                b',' => cells.push(finish_cell(&mut buffer)),
                _ => buffer.push(fold_tab(byte)),
            }
        }
        pos += 1;
    }

    // A line ending exactly on a delimiter yields no phantom final cell.
    // An unclosed quote is non-fatal: whatever is buffered flushes as-is,
    // and quote state never leaks across lines.
    if !buffer.is_empty() {
        cells.push(finish_cell(&mut buffer));
    }

    cells
}

fn fold_tab(byte: u8) -> u8 {
    if byte == b'\t' { b' ' } else { byte }
}

/// Flush the scan buffer as one cell.
fn finish_cell(buffer: &mut Vec<u8>) -> String {
    let bytes = std::mem::take(buffer);
    match String::from_utf8(bytes) {
        Ok(cell) => cell,
        Err(err) => String::from_utf8_lossy(&err.into_bytes()).into_owned(),
    }
}

/// Iterator over lines with CRLF and lone-CR terminators normalized away.
struct Lines<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Lines { text, pos: 0 }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.pos >= self.text.len() {
            return None;
        }

        let rest = &self.text.as_bytes()[self.pos..];
        let (length, advance) = match memchr2(b'\n', b'\r', rest) {
            Some(end) => {
                // CRLF counts as a single terminator
                let skip = if rest[end] == b'\r' && rest.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                (end, end + skip)
            },
            None => (rest.len(), rest.len()),
        };

        // Terminators are ASCII, so the slice boundary is a char boundary
        let line = &self.text[self.pos..self.pos + length];
        self.pos += advance;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(text: &str) -> Vec<String> {
        parse(text).cells
    }

    #[test]
    fn test_simple_parsing() {
        let grid = parse("Name,Value\nSword,10\nShield,5\n");
        assert_eq!(grid.width, 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cells, ["Name", "Value", "Sword", "10", "Shield", "5"]);
    }

    #[test]
    fn test_quoted_delimiter() {
        assert_eq!(cells("A,\"B,C\",D\n"), ["A", "B,C", "D"]);
    }

    #[test]
    fn test_doubled_quotes() {
        assert_eq!(cells("\"X\"\"Y\",Z\n"), ["X\"Y", "Z"]);
        assert_eq!(cells("\"Value with \"\"quotes\"\"\",Normal"), [
            "Value with \"quotes\"",
            "Normal"
        ]);
    }

    #[test]
    fn test_no_phantom_trailing_cell() {
        // Comma-terminated and bare last cells parse the same
        assert_eq!(cells("A,B,\n"), ["A", "B"]);
        assert_eq!(cells("A,B\n"), ["A", "B"]);
    }

    #[test]
    fn test_empty_cells_in_the_middle() {
        assert_eq!(cells("a,,c\n"), ["a", "", "c"]);
    }

    #[test]
    fn test_comment_lines() {
        let grid = parse("// note\nName,Value\n//Sword,10\n");
        assert_eq!(grid.cells, ["Name", "Value"]);
        // Leading whitespace is not trimmed before the comment check
        let grid = parse(" // not a comment\n");
        assert_eq!(grid.cells, [" // not a comment"]);
    }

    #[test]
    fn test_blank_lines() {
        let grid = parse("a,b\n,, ,\n   \n\t\nc,d\n");
        assert_eq!(grid.width, 2);
        assert_eq!(grid.cells, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_ragged_rows_padded() {
        let grid = parse("a,b,c\nd\ne,f\n");
        assert_eq!(grid.width, 3);
        assert_eq!(grid.cells, ["a", "b", "c", "d", "", "", "e", "f", ""]);
    }

    #[test]
    fn test_line_ending_normalization() {
        assert_eq!(cells("a,b\r\nc,d\re,f\n"), ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_tab_folding() {
        // Tabs never act as delimiters, they fold to single spaces
        assert_eq!(cells("a\tb,c\n"), ["a b", "c"]);
        assert_eq!(cells("\"a\tb\",c\n"), ["a b", "c"]);
    }

    #[test]
    fn test_unbalanced_quote_flushes_rest_of_line() {
        // The open quote swallows the delimiter, so the first row has one
        // cell and gets padded to the width of the second
        assert_eq!(cells("\"unterminated,x\nnext,y\n"), [
            "unterminated,x",
            "",
            "next",
            "y"
        ]);
    }

    #[test]
    fn test_degenerate_empty_input() {
        for text in ["", "\n", "// only a comment\n", ",, ,\n  \n"] {
            let grid = parse(text);
            assert_eq!(grid.width, 0);
            assert_eq!(grid.height(), 0);
            assert!(grid.cells.is_empty());
        }
    }

    #[test]
    fn test_quote_mid_cell_enters_quote_mode() {
        // An opening quote is consumed wherever it appears outside quotes
        assert_eq!(cells("X\"\"Y,Z\n"), ["XY", "Z"]);
    }
}
