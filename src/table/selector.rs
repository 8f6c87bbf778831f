//! Index-or-name selectors for addressing rows and columns

/// Addresses a row or column either by numeric index or by name.
///
/// Names resolve through the table's header-row lookup (for columns) or
/// label-column lookup (for rows). `From` conversions let accessors take
/// either form directly:
///
/// ```
/// use longan::{Selector, Table};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = Table::from_text("items", "Name,Value\nSword,10\n")?;
/// assert_eq!(table.cell(1, 1)?, table.cell("Value", "Sword")?);
/// assert_eq!(table.cell(Selector::Index(1), Selector::Name("Sword"))?, "10");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Zero-based numeric index
    Index(usize),
    /// Header or label text
    Name(&'a str),
}

impl From<usize> for Selector<'_> {
    fn from(index: usize) -> Self {
        Selector::Index(index)
    }
}

impl<'a> From<&'a str> for Selector<'a> {
    fn from(name: &'a str) -> Self {
        Selector::Name(name)
    }
}

impl<'a> From<&'a String> for Selector<'a> {
    fn from(name: &'a String) -> Self {
        Selector::Name(name)
    }
}
