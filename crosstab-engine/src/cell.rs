//! FILENAME: crosstab-engine/src/cell.rs
//! Cell - a rectangular occupant of the crosstab grid.
//!
//! A cell is anchored at (row, col) and covers `row_span` x `col_span`
//! positions. The grid's occupancy index resolves every covered position
//! back to the anchor; non-anchor positions are not separately represented.
//! Each edge independently marks whether its border should be drawn.

use serde::{Deserialize, Serialize};

use crate::span::Axis;

/// Border visibility per cell edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeBorders {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl EdgeBorders {
    pub const fn all() -> Self {
        EdgeBorders {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub const fn none() -> Self {
        EdgeBorders {
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }

    /// The edge on the far side of a span running along `axis`:
    /// right for columns, bottom for rows.
    pub(crate) fn trailing(&self, axis: Axis) -> bool {
        match axis {
            Axis::Column => self.right,
            Axis::Row => self.bottom,
        }
    }

    /// The edge on the near side: left for columns, top for rows.
    pub(crate) fn leading(&self, axis: Axis) -> bool {
        match axis {
            Axis::Column => self.left,
            Axis::Row => self.top,
        }
    }
}

impl Default for EdgeBorders {
    fn default() -> Self {
        EdgeBorders::all()
    }
}

/// A cell occupying a rectangular range of (row, column) positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Anchor row (0-based).
    pub row: usize,

    /// Anchor column (0-based).
    pub col: usize,

    /// Number of rows covered (>= 1).
    #[serde(default = "one")]
    pub row_span: usize,

    /// Number of columns covered (>= 1).
    #[serde(default = "one")]
    pub col_span: usize,

    /// Hidden cells never contribute borders.
    #[serde(default = "yes")]
    pub visible: bool,

    /// Per-edge border visibility.
    #[serde(default)]
    pub borders: EdgeBorders,

    /// Preferred content width, consulted by `best_size` for single-column
    /// cells.
    #[serde(default)]
    pub preferred_width: f64,

    /// Preferred content height, consulted by `best_size` for single-row
    /// cells.
    #[serde(default)]
    pub preferred_height: f64,
}

fn one() -> usize {
    1
}

fn yes() -> bool {
    true
}

impl Cell {
    /// Creates a visible 1x1 cell with all borders shown.
    pub fn new(row: usize, col: usize) -> Self {
        Cell {
            row,
            col,
            row_span: 1,
            col_span: 1,
            visible: true,
            borders: EdgeBorders::all(),
            preferred_width: 0.0,
            preferred_height: 0.0,
        }
    }

    /// Sets the covered extent. Spans below 1 are clamped to 1.
    pub fn with_span(mut self, row_span: usize, col_span: usize) -> Self {
        self.row_span = row_span.max(1);
        self.col_span = col_span.max(1);
        self
    }

    pub fn with_borders(mut self, borders: EdgeBorders) -> Self {
        self.borders = borders;
        self
    }

    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_preferred_size(mut self, width: f64, height: f64) -> Self {
        self.preferred_width = width;
        self.preferred_height = height;
        self
    }

    /// Anchor index along `axis`.
    pub fn anchor(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.col,
        }
    }

    /// Covered length along `axis`.
    pub fn span_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_span,
            Axis::Column => self.col_span,
        }
    }

    /// Index of the last position this cell covers along `axis`.
    pub fn span_end(&self, axis: Axis) -> usize {
        self.anchor(axis) + self.span_len(axis) - 1
    }

    /// Whether this cell covers the given position.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row <= self.span_end(Axis::Row)
            && col >= self.col
            && col <= self.span_end(Axis::Column)
    }

    /// Preferred content size along `axis`.
    pub(crate) fn preferred(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.preferred_height,
            Axis::Column => self.preferred_width,
        }
    }
}
