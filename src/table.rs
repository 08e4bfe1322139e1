//! Console table layout for command output.
//!
//! Tables are built with `prettytable` in the classic bordered style:
//!
//! ```text
//! +-----+---------+
//! | Ref | Country |
//! +-----+---------+
//! | 1   | FR      |
//! +-----+---------+
//! ```

use std::io::{self, Write};

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};

/// Rules above the titles, below the titles, and after the last row only.
fn console_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separators(
            &[LinePosition::Top, LinePosition::Title, LinePosition::Bottom],
            LineSeparator::new('-', '+', '+', '+'),
        )
        .padding(1, 1)
        .build()
}

fn row_of<I, S>(cells: I) -> Row
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Row::new(cells.into_iter().map(|c| Cell::new(c.as_ref())).collect())
}

/// Creates an empty table with the given column titles.
#[must_use]
pub fn with_titles<I, S>(titles: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = Table::new();
    table.set_format(console_format());
    table.set_titles(row_of(titles));
    table
}

/// Appends a row. Rows shorter than the titles render with empty cells.
pub fn push_row<I, S>(table: &mut Table, cells: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    table.add_row(row_of(cells));
}

/// Writes `table` to `out`.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn render(table: &Table, mut out: &mut dyn Write) -> io::Result<()> {
    table.print(&mut out)?;
    Ok(())
}
