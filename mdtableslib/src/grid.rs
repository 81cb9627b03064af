//! Table grid model: cells, rows, and the builder that assembles them.
//!
//! A grid is built fresh for each table and consumed by one render
//! call. Alignment travels with each cell from construction on, so a
//! grid can never pair a cell with the wrong column descriptor.

use serde::{Deserialize, Serialize};

use crate::align::Alignment;
use crate::escape::escape_pipes;

/// A single cell: insertion-ready text plus its column's alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    content: String,
    alignment: Alignment,
}

impl Cell {
    /// Create a cell from rendered inline text.
    ///
    /// Literal pipes are escaped here, before the cell enters a grid,
    /// so width measurement and padding always see the text exactly as
    /// it will be written between the output pipes.
    pub fn new(rendered: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            content: escape_pipes(&rendered.into()),
            alignment,
        }
    }

    /// The insertion-ready cell text (pipes already escaped).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Alignment of the column this cell belongs to.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `index`, or `None` for a row shorter than the header.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A parsed table: header row first, body rows after.
///
/// Rows are tolerated at any length. The header fixes the column
/// count; shorter body rows read as empty cells and longer ones are
/// truncated at render time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// The header row, or `None` for an empty grid.
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Body rows (everything after the header).
    pub fn body(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Incremental grid assembly while walking parser events.
///
/// Cells accumulate into the current row; `end_row` seals it. The
/// first sealed row becomes the header.
#[derive(Debug, Default)]
pub struct TableBuilder {
    rows: Vec<Row>,
    current: Vec<Cell>,
}

impl TableBuilder {
    /// Append a cell to the row under construction.
    pub fn push_cell(&mut self, rendered: impl Into<String>, alignment: Alignment) {
        self.current.push(Cell::new(rendered, alignment));
    }

    /// Seal the row under construction.
    pub fn end_row(&mut self) {
        let cells = std::mem::take(&mut self.current);
        self.rows.push(Row::new(cells));
    }

    /// Finish the grid. An unsealed row with cells still counts.
    pub fn build(mut self) -> Table {
        if !self.current.is_empty() {
            let cells = std::mem::take(&mut self.current);
            self.rows.push(Row::new(cells));
        }
        Table::new(self.rows)
    }
}
