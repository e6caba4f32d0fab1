//! FILENAME: crosstab-engine/src/definition.rs
//! CrossTab Definition - the serializable configuration.
//!
//! This module contains the types needed to DESCRIBE a crosstab: row
//! heights, column widths, and cell placements. These structures are
//! immutable snapshots of caller intent; `build` turns one into a live
//! [`CrossTabGrid`].

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::GridError;
use crate::grid::CrossTabGrid;

/// The complete, serializable definition of a crosstab.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrossTabDef {
    /// Row heights, ordered top to bottom.
    pub row_heights: Vec<f64>,

    /// Column widths, ordered left to right.
    pub col_widths: Vec<f64>,

    /// Cell placements. Order is insertion order; positions must not
    /// overlap.
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl CrossTabDef {
    pub fn new(row_heights: Vec<f64>, col_widths: Vec<f64>) -> Self {
        CrossTabDef {
            row_heights,
            col_widths,
            cells: Vec::new(),
        }
    }

    pub fn with_cells(mut self, cells: Vec<Cell>) -> Self {
        self.cells = cells;
        self
    }

    /// Builds the live grid. Fails when a cell leaves the declared bounds
    /// or overlaps another.
    pub fn build(&self) -> Result<CrossTabGrid, GridError> {
        let mut grid = CrossTabGrid::new();
        for &height in &self.row_heights {
            grid.add_row(height);
        }
        for &width in &self.col_widths {
            grid.add_column(width);
        }
        for cell in &self.cells {
            grid.add_cell(cell.clone())?;
        }
        Ok(grid)
    }
}
