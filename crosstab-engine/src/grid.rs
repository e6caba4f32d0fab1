//! FILENAME: crosstab-engine/src/grid.rs
//! CrossTabGrid - ordered rows and columns, indexed cell occupancy.
//!
//! The grid owns the spans of both axes and the cells placed on them. An
//! occupancy index maps every covered (row, col) position to its anchor
//! cell, so multi-span cells resolve to a single occupant. Total width and
//! height are maintained incrementally: the sum of all column sizes is the
//! grid width, the sum of all row sizes is the grid height.

use rustc_hash::FxHashMap;

use crate::cell::{Cell, EdgeBorders};
use crate::divider::{self, Divider};
use crate::error::GridError;
use crate::span::{Axis, Span};

/// Index of a cell in the grid's cell list.
pub type CellId = usize;

#[derive(Debug, Clone, Default)]
pub struct CrossTabGrid {
    rows: Vec<Span>,
    cols: Vec<Span>,
    cells: Vec<Cell>,

    /// Every covered position maps to its anchor cell.
    index: FxHashMap<(usize, usize), CellId>,

    width: f64,
    height: f64,
}

impl CrossTabGrid {
    /// Creates an empty grid with no rows or columns.
    pub fn new() -> Self {
        CrossTabGrid::default()
    }

    /// Creates a grid with uniform row heights and column widths.
    pub fn with_dimensions(rows: usize, cols: usize, row_height: f64, col_width: f64) -> Self {
        CrossTabGrid {
            rows: (0..rows).map(|_| Span::new(row_height)).collect(),
            cols: (0..cols).map(|_| Span::new(col_width)).collect(),
            cells: Vec::new(),
            index: FxHashMap::default(),
            width: col_width * cols as f64,
            height: row_height * rows as f64,
        }
    }

    // ========================================================================
    // SPAN ACCESS
    // ========================================================================

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols.len()
    }

    /// Number of spans along `axis`.
    pub fn len(&self, axis: Axis) -> usize {
        self.spans(axis).len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    /// Sum of all column sizes.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sum of all row sizes.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Total extent along `axis`: width for columns, height for rows.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Column => self.width,
            Axis::Row => self.height,
        }
    }

    pub fn spans(&self, axis: Axis) -> &[Span] {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.cols,
        }
    }

    fn spans_mut(&mut self, axis: Axis) -> &mut Vec<Span> {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.cols,
        }
    }

    /// The span at `index` along `axis`. Panics when out of range.
    pub fn span(&self, axis: Axis, index: usize) -> &Span {
        &self.spans(axis)[index]
    }

    /// Offset of the span's leading edge from the grid origin.
    /// `index` may equal the span count, giving the grid's total extent.
    pub fn span_origin(&self, axis: Axis, index: usize) -> f64 {
        let spans = self.spans(axis);
        assert!(
            index <= spans.len(),
            "span index {index} out of range for {axis:?} (len {})",
            spans.len()
        );
        spans[..index].iter().map(Span::size).sum()
    }

    /// The span's own extent along `axis` (row height / column width),
    /// paired with [`CrossTabGrid::span_origin`] for painting.
    /// Panics when out of range.
    pub fn span_extent(&self, axis: Axis, index: usize) -> f64 {
        self.span(axis, index).size()
    }

    /// Resizes one span, adjusting the grid total by the delta. Only this
    /// span's cached dividers go stale; neighbors keep theirs.
    pub fn set_span_size(&mut self, axis: Axis, index: usize, size: f64) {
        let delta = size - self.span(axis, index).size();
        self.spans_mut(axis)[index].set_size(size);
        match axis {
            Axis::Column => self.width += delta,
            Axis::Row => self.height += delta,
        }
    }

    pub fn set_row_height(&mut self, index: usize, height: f64) {
        self.set_span_size(Axis::Row, index, height);
    }

    pub fn set_col_width(&mut self, index: usize, width: f64) {
        self.set_span_size(Axis::Column, index, width);
    }

    // ========================================================================
    // STRUCTURAL EDITS - SPANS
    // ========================================================================

    pub fn add_row(&mut self, height: f64) {
        self.rows.push(Span::new(height));
        self.height += height;
        self.reset_all_dividers();
    }

    pub fn add_column(&mut self, width: f64) {
        self.cols.push(Span::new(width));
        self.width += width;
        self.reset_all_dividers();
    }

    /// Inserts a row before `at`, shifting cell anchors below it and
    /// growing cells that straddle the insertion point.
    pub fn insert_row(&mut self, at: usize, height: f64) -> Result<(), GridError> {
        self.insert_span(Axis::Row, at, height)
    }

    /// Inserts a column before `at`; see [`CrossTabGrid::insert_row`].
    pub fn insert_column(&mut self, at: usize, width: f64) -> Result<(), GridError> {
        self.insert_span(Axis::Column, at, width)
    }

    fn insert_span(&mut self, axis: Axis, at: usize, size: f64) -> Result<(), GridError> {
        let len = self.len(axis);
        if at > len {
            return Err(GridError::IndexOutOfRange {
                axis,
                index: at,
                len,
            });
        }

        self.spans_mut(axis).insert(at, Span::new(size));
        match axis {
            Axis::Column => self.width += size,
            Axis::Row => self.height += size,
        }

        for cell in &mut self.cells {
            let anchor = cell.anchor(axis);
            if anchor >= at {
                match axis {
                    Axis::Row => cell.row += 1,
                    Axis::Column => cell.col += 1,
                }
            } else if cell.span_end(axis) >= at {
                // The cell straddles the insertion point; it grows.
                match axis {
                    Axis::Row => cell.row_span += 1,
                    Axis::Column => cell.col_span += 1,
                }
            }
        }

        self.rebuild_index();
        self.reset_all_dividers();
        Ok(())
    }

    /// Removes the row at `at`. Cells anchored solely in that row are
    /// dropped; spanning cells shrink by one.
    pub fn remove_row(&mut self, at: usize) -> Result<(), GridError> {
        self.remove_span(Axis::Row, at)
    }

    /// Removes the column at `at`; see [`CrossTabGrid::remove_row`].
    pub fn remove_column(&mut self, at: usize) -> Result<(), GridError> {
        self.remove_span(Axis::Column, at)
    }

    fn remove_span(&mut self, axis: Axis, at: usize) -> Result<(), GridError> {
        let len = self.len(axis);
        if at >= len {
            return Err(GridError::IndexOutOfRange {
                axis,
                index: at,
                len,
            });
        }

        let removed = self.spans_mut(axis).remove(at);
        match axis {
            Axis::Column => self.width -= removed.size(),
            Axis::Row => self.height -= removed.size(),
        }

        self.cells.retain_mut(|cell| {
            let anchor = cell.anchor(axis);
            let end = cell.span_end(axis);
            if anchor == at && cell.span_len(axis) == 1 {
                return false;
            }
            if anchor > at {
                match axis {
                    Axis::Row => cell.row -= 1,
                    Axis::Column => cell.col -= 1,
                }
            } else if end >= at {
                match axis {
                    Axis::Row => cell.row_span -= 1,
                    Axis::Column => cell.col_span -= 1,
                }
            }
            true
        });

        self.rebuild_index();
        self.reset_all_dividers();
        Ok(())
    }

    // ========================================================================
    // STRUCTURAL EDITS - CELLS
    // ========================================================================

    /// Places a cell. Fails when the covered region leaves the grid or
    /// overlaps an existing occupant.
    pub fn add_cell(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(&cell)?;
        for pos in covered_positions(&cell) {
            if self.index.contains_key(&pos) {
                return Err(GridError::Overlap {
                    row: pos.0,
                    col: pos.1,
                });
            }
        }
        self.insert_unchecked(cell);
        Ok(())
    }

    /// Removes the cell occupying (row, col), resolving covered positions
    /// to the anchor. Returns the removed cell, or `None` for an empty
    /// position. Panics when the coordinates leave the grid.
    pub fn remove_cell(&mut self, row: usize, col: usize) -> Option<Cell> {
        self.assert_in_range(row, col);
        let id = self.index.get(&(row, col)).copied()?;

        let cell = self.cells.swap_remove(id);
        for pos in covered_positions(&cell) {
            self.index.remove(&pos);
        }
        // swap_remove moved the former last cell into `id`; re-point it.
        if id < self.cells.len() {
            let moved = self.cells[id].clone();
            for pos in covered_positions(&moved) {
                self.index.insert(pos, id);
            }
        }

        self.reset_dividers_around(&cell);
        Some(cell)
    }

    /// Replaces whatever occupies the new cell's anchor position. Fails
    /// without modifying the grid when the new cell would collide with a
    /// different occupant.
    pub fn replace_cell(&mut self, cell: Cell) -> Result<Option<Cell>, GridError> {
        self.check_bounds(&cell)?;
        let anchor_id = self.index.get(&(cell.row, cell.col)).copied();
        for pos in covered_positions(&cell) {
            if let Some(&id) = self.index.get(&pos) {
                if Some(id) != anchor_id {
                    return Err(GridError::Overlap {
                        row: pos.0,
                        col: pos.1,
                    });
                }
            }
        }

        let removed = if anchor_id.is_some() {
            self.remove_cell(cell.row, cell.col)
        } else {
            None
        };
        self.insert_unchecked(cell);
        Ok(removed)
    }

    /// Toggles a cell's visibility. Returns false for an empty position.
    pub fn set_cell_visible(&mut self, row: usize, col: usize, visible: bool) -> bool {
        self.assert_in_range(row, col);
        let Some(&id) = self.index.get(&(row, col)) else {
            return false;
        };
        self.cells[id].visible = visible;
        let region = self.cells[id].clone();
        self.reset_dividers_around(&region);
        true
    }

    /// Rewrites a cell's per-edge border flags. Returns false for an empty
    /// position.
    pub fn set_cell_borders(&mut self, row: usize, col: usize, borders: EdgeBorders) -> bool {
        self.assert_in_range(row, col);
        let Some(&id) = self.index.get(&(row, col)) else {
            return false;
        };
        self.cells[id].borders = borders;
        let region = self.cells[id].clone();
        self.reset_dividers_around(&region);
        true
    }

    fn insert_unchecked(&mut self, cell: Cell) {
        let id = self.cells.len();
        for pos in covered_positions(&cell) {
            self.index.insert(pos, id);
        }
        self.reset_dividers_around(&cell);
        self.cells.push(cell);
    }

    fn check_bounds(&self, cell: &Cell) -> Result<(), GridError> {
        if cell.span_end(Axis::Row) >= self.rows.len() {
            return Err(GridError::IndexOutOfRange {
                axis: Axis::Row,
                index: cell.span_end(Axis::Row),
                len: self.rows.len(),
            });
        }
        if cell.span_end(Axis::Column) >= self.cols.len() {
            return Err(GridError::IndexOutOfRange {
                axis: Axis::Column,
                index: cell.span_end(Axis::Column),
                len: self.cols.len(),
            });
        }
        Ok(())
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (id, cell) in self.cells.iter().enumerate() {
            for pos in covered_positions(cell) {
                self.index.insert(pos, id);
            }
        }
    }

    // ========================================================================
    // CELL ACCESS
    // ========================================================================

    /// The cell occupying (row, col), resolved to its anchor. `None` means
    /// the position is empty. Panics when the coordinates leave the grid:
    /// that is a caller bug, not an empty position.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.assert_in_range(row, col);
        self.index.get(&(row, col)).map(|&id| &self.cells[id])
    }

    /// All cells in insertion order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn assert_in_range(&self, row: usize, col: usize) {
        assert!(
            row < self.rows.len() && col < self.cols.len(),
            "cell position ({row}, {col}) out of range for {}x{} grid",
            self.rows.len(),
            self.cols.len()
        );
    }

    /// Tolerant lookup for the divider walk: a span index past the last
    /// span is "no cell" rather than an error.
    pub(crate) fn probe(&self, axis: Axis, span_index: usize, ortho: usize) -> Option<&Cell> {
        if span_index >= self.len(axis) {
            return None;
        }
        let pos = match axis {
            Axis::Column => (ortho, span_index),
            Axis::Row => (span_index, ortho),
        };
        self.index.get(&pos).map(|&id| &self.cells[id])
    }

    // ========================================================================
    // DIVIDERS
    // ========================================================================

    /// The border segments along the trailing edge of the span at `index`.
    /// Rebuilds lazily into the span's pooled buffer; repeated calls
    /// without intervening edits return the cached list without
    /// allocating.
    pub fn dividers(&mut self, axis: Axis, index: usize) -> &[Divider] {
        let len = self.len(axis);
        assert!(
            index < len,
            "span index {index} out of range for {axis:?} (len {len})"
        );

        if !self.span(axis, index).cache.valid {
            let mut buf = std::mem::take(&mut self.spans_mut(axis)[index].cache.buf);
            divider::build(self, axis, index, &mut buf);
            let cache = &mut self.spans_mut(axis)[index].cache;
            cache.buf = buf;
            cache.valid = true;
        }
        &self.span(axis, index).cache.buf
    }

    /// The boundary before span 0 of `axis`: always a single segment at
    /// position 0 spanning the full orthogonal extent, even with no cells.
    pub fn leading_boundary(&self, axis: Axis) -> Divider {
        Divider {
            position: 0.0,
            start: 0,
            end: self.len(axis.other()),
        }
    }

    /// Retires one span's cached dividers into its reuse pool.
    pub fn reset_dividers(&mut self, axis: Axis, index: usize) {
        self.spans_mut(axis)[index].reset_dividers();
    }

    /// Retires every span's cached dividers.
    pub fn reset_all_dividers(&mut self) {
        for span in &mut self.rows {
            span.reset_dividers();
        }
        for span in &mut self.cols {
            span.reset_dividers();
        }
    }

    /// A cell covering spans `a..=b` along an axis affects the boundaries
    /// `a-1..=b` (each boundary is cached on the span whose trailing edge
    /// it is).
    fn reset_dividers_around(&mut self, cell: &Cell) {
        for axis in [Axis::Row, Axis::Column] {
            let first = cell.anchor(axis).saturating_sub(1);
            let last = cell.span_end(axis).min(self.len(axis).saturating_sub(1));
            for i in first..=last {
                self.spans_mut(axis)[i].reset_dividers();
            }
        }
    }

    // ========================================================================
    // SIZING
    // ========================================================================

    /// Auto-fit size for one span: the maximum of its current size and the
    /// preferred content size of every single-span cell it holds. Cells
    /// spanning more than one row/column do not constrain a single span.
    pub fn best_size(&self, axis: Axis, index: usize) -> f64 {
        let mut best = self.span(axis, index).size();
        for cell in &self.cells {
            if cell.span_len(axis) == 1 && cell.anchor(axis) == index {
                best = best.max(cell.preferred(axis));
            }
        }
        best
    }
}

/// Iterates every (row, col) position a cell covers.
fn covered_positions(cell: &Cell) -> impl Iterator<Item = (usize, usize)> + '_ {
    (cell.row..cell.row + cell.row_span)
        .flat_map(move |r| (cell.col..cell.col + cell.col_span).map(move |c| (r, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bordered_grid(rows: usize, cols: usize) -> CrossTabGrid {
        let mut grid = CrossTabGrid::with_dimensions(rows, cols, 20.0, 80.0);
        for r in 0..rows {
            for c in 0..cols {
                grid.add_cell(Cell::new(r, c)).unwrap();
            }
        }
        grid
    }

    #[test]
    fn totals_track_span_sizes() {
        let grid = CrossTabGrid::with_dimensions(3, 4, 20.0, 80.0);
        assert_eq!(grid.height(), 60.0);
        assert_eq!(grid.width(), 320.0);
    }

    #[test]
    fn set_width_moves_total_by_delta_only() {
        let mut grid = CrossTabGrid::with_dimensions(2, 3, 20.0, 80.0);
        grid.set_col_width(1, 95.0);

        assert_eq!(grid.width(), 240.0 + 15.0);
        assert_eq!(grid.span(Axis::Column, 0).size(), 80.0);
        assert_eq!(grid.span(Axis::Column, 2).size(), 80.0);
        assert_eq!(grid.span(Axis::Column, 1).size(), 95.0);
    }

    #[test]
    fn span_origin_is_prefix_sum() {
        let mut grid = CrossTabGrid::with_dimensions(2, 3, 20.0, 80.0);
        grid.set_col_width(0, 100.0);
        assert_eq!(grid.span_origin(Axis::Column, 0), 0.0);
        assert_eq!(grid.span_origin(Axis::Column, 1), 100.0);
        assert_eq!(grid.span_origin(Axis::Column, 3), 260.0);

        // Origin plus extent gives the next span's origin.
        assert_eq!(grid.span_extent(Axis::Column, 0), 100.0);
        assert_eq!(
            grid.span_origin(Axis::Column, 1) + grid.span_extent(Axis::Column, 1),
            grid.span_origin(Axis::Column, 2)
        );
    }

    #[test]
    fn cell_resolves_covered_positions_to_anchor() {
        let mut grid = CrossTabGrid::with_dimensions(4, 4, 20.0, 80.0);
        grid.add_cell(Cell::new(1, 1).with_span(2, 2)).unwrap();

        let anchor = grid.cell(2, 2).expect("covered position resolves");
        assert_eq!((anchor.row, anchor.col), (1, 1));
        assert!(grid.cell(0, 0).is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn cell_out_of_range_panics() {
        let grid = CrossTabGrid::with_dimensions(2, 2, 20.0, 80.0);
        let _ = grid.cell(2, 0);
    }

    #[test]
    fn add_cell_rejects_overlap_and_overflow() {
        let mut grid = CrossTabGrid::with_dimensions(3, 3, 20.0, 80.0);
        grid.add_cell(Cell::new(0, 0).with_span(2, 2)).unwrap();

        assert_eq!(
            grid.add_cell(Cell::new(1, 1)),
            Err(GridError::Overlap { row: 1, col: 1 })
        );
        assert_eq!(
            grid.add_cell(Cell::new(2, 2).with_span(1, 2)),
            Err(GridError::IndexOutOfRange {
                axis: Axis::Column,
                index: 3,
                len: 3,
            })
        );
    }

    #[test]
    fn remove_cell_clears_every_covered_position() {
        let mut grid = CrossTabGrid::with_dimensions(3, 3, 20.0, 80.0);
        grid.add_cell(Cell::new(0, 0).with_span(2, 2)).unwrap();
        grid.add_cell(Cell::new(2, 2)).unwrap();

        let removed = grid.remove_cell(1, 1).expect("anchor resolved");
        assert_eq!((removed.row, removed.col), (0, 0));
        assert!(grid.cell(0, 0).is_none());
        assert!(grid.cell(1, 1).is_none());
        // The swap-moved survivor still resolves.
        assert!(grid.cell(2, 2).is_some());
    }

    #[test]
    fn replace_cell_swaps_anchor_occupant() {
        let mut grid = CrossTabGrid::with_dimensions(3, 3, 20.0, 80.0);
        grid.add_cell(Cell::new(0, 0)).unwrap();

        let old = grid
            .replace_cell(Cell::new(0, 0).with_span(1, 2))
            .unwrap()
            .expect("previous occupant returned");
        assert_eq!(old.col_span, 1);
        assert_eq!(grid.cell(0, 1).unwrap().col_span, 2);
    }

    #[test]
    fn replace_cell_refuses_collision_with_other_cell() {
        let mut grid = CrossTabGrid::with_dimensions(3, 3, 20.0, 80.0);
        grid.add_cell(Cell::new(0, 0)).unwrap();
        grid.add_cell(Cell::new(0, 1)).unwrap();

        let err = grid
            .replace_cell(Cell::new(0, 0).with_span(1, 2))
            .unwrap_err();
        assert_eq!(err, GridError::Overlap { row: 0, col: 1 });
        // Nothing changed.
        assert_eq!(grid.cell(0, 0).unwrap().col_span, 1);
    }

    #[test]
    fn insert_row_shifts_and_grows_cells() {
        let mut grid = CrossTabGrid::with_dimensions(3, 2, 20.0, 80.0);
        grid.add_cell(Cell::new(0, 0).with_span(2, 1)).unwrap(); // straddles row 1
        grid.add_cell(Cell::new(2, 1)).unwrap(); // below insertion

        grid.insert_row(1, 30.0).unwrap();

        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.height(), 90.0);
        let straddler = grid.cell(0, 0).unwrap();
        assert_eq!(straddler.row_span, 3);
        let shifted = grid.cell(3, 1).unwrap();
        assert_eq!(shifted.row, 3);
    }

    #[test]
    fn remove_column_drops_and_shrinks_cells() {
        let mut grid = CrossTabGrid::with_dimensions(2, 3, 20.0, 80.0);
        grid.add_cell(Cell::new(0, 1)).unwrap(); // dropped with its column
        grid.add_cell(Cell::new(1, 0).with_span(1, 3)).unwrap(); // shrinks

        grid.remove_column(1).unwrap();

        assert_eq!(grid.col_count(), 2);
        assert_eq!(grid.width(), 160.0);
        assert!(grid.cell(0, 1).is_none());
        assert_eq!(grid.cell(1, 0).unwrap().col_span, 2);
    }

    #[test]
    fn remove_span_out_of_range_is_an_error() {
        let mut grid = CrossTabGrid::with_dimensions(1, 1, 20.0, 80.0);
        assert_eq!(
            grid.remove_row(1),
            Err(GridError::IndexOutOfRange {
                axis: Axis::Row,
                index: 1,
                len: 1,
            })
        );
    }

    // ========================================================================
    // DIVIDERS
    // ========================================================================

    #[test]
    fn borderless_grid_has_no_dividers() {
        let mut grid = CrossTabGrid::with_dimensions(3, 3, 20.0, 80.0);
        for r in 0..3 {
            for c in 0..3 {
                grid.add_cell(Cell::new(r, c).with_borders(EdgeBorders::none()))
                    .unwrap();
            }
        }
        for i in 0..3 {
            assert!(grid.dividers(Axis::Column, i).is_empty());
            assert!(grid.dividers(Axis::Row, i).is_empty());
        }
    }

    #[test]
    fn fully_bordered_grid_yields_one_full_divider_per_span() {
        let mut grid = bordered_grid(3, 4);
        for c in 0..4 {
            let segs = grid.dividers(Axis::Column, c).to_vec();
            assert_eq!(
                segs,
                vec![Divider {
                    position: 80.0,
                    start: 0,
                    end: 3,
                }],
                "column {c}"
            );
        }
        for r in 0..3 {
            let segs = grid.dividers(Axis::Row, r).to_vec();
            assert_eq!(
                segs,
                vec![Divider {
                    position: 20.0,
                    start: 0,
                    end: 4,
                }],
                "row {r}"
            );
        }
    }

    #[test]
    fn spanning_cell_breaks_divider_into_segments() {
        let mut grid = CrossTabGrid::with_dimensions(4, 3, 20.0, 80.0);
        for r in 0..4 {
            for c in 0..3 {
                if r == 1 && c == 1 {
                    grid.add_cell(Cell::new(1, 1).with_span(2, 2)).unwrap();
                } else if !(r >= 1 && r <= 2 && c >= 1 && c <= 2) {
                    grid.add_cell(Cell::new(r, c)).unwrap();
                }
            }
        }

        // The 2x2 cell straddles column 1's trailing edge in rows 1-2.
        let segs = grid.dividers(Axis::Column, 1).to_vec();
        assert_eq!(
            segs,
            vec![
                Divider {
                    position: 80.0,
                    start: 0,
                    end: 1,
                },
                Divider {
                    position: 80.0,
                    start: 3,
                    end: 4,
                },
            ]
        );
    }

    #[test]
    fn border_from_either_side_keeps_segment() {
        // Near cell hides its right edge, far cell shows its left edge:
        // the shared boundary is still drawn.
        let mut grid = CrossTabGrid::with_dimensions(1, 2, 20.0, 80.0);
        let mut hidden_right = EdgeBorders::all();
        hidden_right.right = false;
        grid.add_cell(Cell::new(0, 0).with_borders(hidden_right))
            .unwrap();
        grid.add_cell(Cell::new(0, 1)).unwrap();

        assert_eq!(grid.dividers(Axis::Column, 0).len(), 1);

        // Hide the far cell's left edge too and the boundary vanishes.
        let mut hidden_left = EdgeBorders::all();
        hidden_left.left = false;
        grid.set_cell_borders(0, 1, hidden_left);
        assert!(grid.dividers(Axis::Column, 0).is_empty());
    }

    #[test]
    fn invisible_cell_contributes_no_borders() {
        let mut grid = CrossTabGrid::with_dimensions(2, 2, 20.0, 80.0);
        grid.add_cell(Cell::new(0, 0)).unwrap();
        grid.add_cell(Cell::new(1, 0)).unwrap();

        assert_eq!(grid.dividers(Axis::Column, 0).len(), 1);
        grid.set_cell_visible(0, 0, false);
        grid.set_cell_visible(1, 0, false);
        assert!(grid.dividers(Axis::Column, 0).is_empty());
    }

    #[test]
    fn empty_positions_break_segments() {
        let mut grid = CrossTabGrid::with_dimensions(3, 2, 20.0, 80.0);
        grid.add_cell(Cell::new(0, 0)).unwrap();
        grid.add_cell(Cell::new(2, 0)).unwrap();

        let segs = grid.dividers(Axis::Column, 0).to_vec();
        assert_eq!(
            segs,
            vec![
                Divider {
                    position: 80.0,
                    start: 0,
                    end: 1,
                },
                Divider {
                    position: 80.0,
                    start: 2,
                    end: 3,
                },
            ]
        );
    }

    #[test]
    fn zero_row_grid_yields_empty_divider_list() {
        let mut grid = CrossTabGrid::new();
        grid.add_column(80.0);
        assert!(grid.dividers(Axis::Column, 0).is_empty());
    }

    #[test]
    fn leading_boundary_always_spans_full_extent() {
        let grid = CrossTabGrid::with_dimensions(3, 2, 20.0, 80.0);
        assert_eq!(
            grid.leading_boundary(Axis::Column),
            Divider {
                position: 0.0,
                start: 0,
                end: 3,
            }
        );
        assert_eq!(
            grid.leading_boundary(Axis::Row),
            Divider {
                position: 0.0,
                start: 0,
                end: 2,
            }
        );
        // Even on an empty grid.
        let empty = CrossTabGrid::new();
        assert_eq!(empty.leading_boundary(Axis::Row).end, 0);
    }

    #[test]
    fn dividers_are_idempotent_without_reallocation() {
        let mut grid = bordered_grid(3, 3);

        let first = grid.dividers(Axis::Column, 1).to_vec();
        let ptr = grid.dividers(Axis::Column, 1).as_ptr();

        let second = grid.dividers(Axis::Column, 1).to_vec();
        assert_eq!(first, second);
        assert_eq!(ptr, grid.dividers(Axis::Column, 1).as_ptr());

        // Explicit reset reuses the pooled buffer on rebuild.
        grid.reset_dividers(Axis::Column, 1);
        assert_eq!(first, grid.dividers(Axis::Column, 1).to_vec());
        assert_eq!(ptr, grid.dividers(Axis::Column, 1).as_ptr());
    }

    #[test]
    fn resizing_a_span_leaves_neighbors_cached() {
        let mut grid = bordered_grid(2, 3);
        let before = grid.dividers(Axis::Column, 0).to_vec();

        grid.set_col_width(1, 120.0);

        // Column 0's segments are unchanged; column 1's position follows
        // its new size.
        assert_eq!(grid.dividers(Axis::Column, 0).to_vec(), before);
        assert_eq!(grid.dividers(Axis::Column, 1)[0].position, 120.0);
    }

    #[test]
    fn cell_edits_invalidate_adjacent_boundaries() {
        let mut grid = bordered_grid(2, 3);
        assert_eq!(grid.dividers(Axis::Column, 0).len(), 1);
        assert_eq!(grid.dividers(Axis::Column, 1).len(), 1);

        // Removing the far cell and hiding the near cell's right edge
        // leaves row 0's stretch of the boundary undrawn.
        grid.remove_cell(0, 1);
        let mut no_right = EdgeBorders::all();
        no_right.right = false;
        grid.set_cell_borders(0, 0, no_right);

        let left = grid.dividers(Axis::Column, 0).to_vec();
        assert_eq!(
            left,
            vec![Divider {
                position: 80.0,
                start: 1,
                end: 2,
            }]
        );
    }

    // ========================================================================
    // SIZING
    // ========================================================================

    #[test]
    fn best_size_considers_only_single_span_cells() {
        let mut grid = CrossTabGrid::with_dimensions(2, 3, 20.0, 80.0);
        grid.add_cell(Cell::new(0, 0).with_preferred_size(110.0, 0.0))
            .unwrap();
        grid.add_cell(Cell::new(1, 0).with_span(1, 2).with_preferred_size(400.0, 0.0))
            .unwrap();

        assert_eq!(grid.best_size(Axis::Column, 0), 110.0);
        // Without the single-span cell the span's own size wins.
        assert_eq!(grid.best_size(Axis::Column, 2), 80.0);
    }
}
