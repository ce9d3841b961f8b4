//! Pipe-table layout.

use crate::model::{Column, Table};

/// Render a table as aligned GFM pipe-table lines.
///
/// Produces a header row, a delimiter row and one line per data row, in that
/// order. Column width is the longest of the header and every cell, counted in
/// characters, and never narrower than the alignment markers need. Cells are
/// padded on the right so every line has the same layout.
#[must_use]
pub fn render_table(table: &Table) -> Vec<String> {
    let widths = column_widths(table);

    let mut lines = Vec::with_capacity(table.rows().len() + 2);
    lines.push(format_row(table.columns().iter().map(Column::name), &widths));
    lines.push(format_row(
        table
            .columns()
            .iter()
            .zip(&widths)
            .map(|(column, &width)| column.alignment().delimiter(width)),
        &widths,
    ));
    for row in table.rows() {
        lines.push(format_row(row.iter(), &widths));
    }
    lines
}

fn column_widths(table: &Table) -> Vec<usize> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            table
                .rows()
                .iter()
                .map(|row| row[i].chars().count())
                .chain([column.name().chars().count(), column.alignment().min_width()])
                .max()
                .unwrap_or_default()
        })
        .collect()
}

fn format_row<I, S>(cells: I, widths: &[usize]) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::from("|");
    for (cell, &width) in cells.zip(widths) {
        line.push_str(&format!(" {:<width$} |", cell.as_ref()));
    }
    line
}
