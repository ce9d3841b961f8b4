//! Table model: columns, alignment, and shape-checked rows.

/// Horizontal alignment of a column.
///
/// Alignment only affects the delimiter row markers. Cell text is always
/// left-justified in the source; the Markdown renderer does the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Centre,
    Right,
}

impl Alignment {
    /// Smallest column width that fits this alignment's delimiter markers
    /// with at least one dash between them.
    #[must_use]
    pub(crate) fn min_width(self) -> usize {
        match self {
            Self::Left | Self::Right => 2,
            Self::Centre => 3,
        }
    }

    /// Build the delimiter cell for a column of the given width.
    ///
    /// `width` must be at least [`min_width`](Self::min_width).
    pub(crate) fn delimiter(self, width: usize) -> String {
        match self {
            Self::Left => format!(":{}", "-".repeat(width - 1)),
            Self::Right => format!("{}:", "-".repeat(width - 1)),
            Self::Centre => format!(":{}:", "-".repeat(width - 2)),
        }
    }
}

/// A named table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    alignment: Alignment,
}

impl Column {
    /// Create a column.
    #[must_use]
    pub fn new(name: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            name: name.into(),
            alignment,
        }
    }

    /// Column header text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column alignment.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

/// Table construction error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A table needs at least one column.
    #[error("table must have at least one column")]
    NoColumns,
    /// Row cell count differs from the column count.
    #[error("row has {actual} cells but the table has {expected} columns")]
    ShapeMismatch {
        /// Number of columns in the table.
        expected: usize,
        /// Number of cells in the rejected row.
        actual: usize,
    },
}

/// Columns plus ordered rows. Every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given columns.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NoColumns`] if `columns` is empty.
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ShapeMismatch`] if the cell count differs from
    /// the column count. The table is left unchanged.
    pub fn add_row(&mut self, cells: Vec<String>) -> Result<(), TableError> {
        if cells.len() != self.columns.len() {
            return Err(TableError::ShapeMismatch {
                expected: self.columns.len(),
                actual: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
