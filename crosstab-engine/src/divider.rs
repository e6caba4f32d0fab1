//! FILENAME: crosstab-engine/src/divider.rs
//! Divider - a drawn border segment along one edge of a span.
//!
//! The walk derives, for one span, the segments of its trailing-edge
//! border line (the right edge of a column, the bottom edge of a row) from
//! the grid's current cell occupancy and per-edge border flags. Adjacent
//! covered positions merge into one segment as long as border visibility
//! agrees and no cell straddles the edge between them.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::grid::CrossTabGrid;
use crate::span::{Axis, DividerBuf};

/// A border segment along a span's trailing edge.
///
/// `position` is measured from the span's own leading edge (for a trailing
/// edge it equals the span's size), so resizing a different span never
/// stales a cached segment. Painters add `CrossTabGrid::span_origin` to get
/// an absolute coordinate. `start..end` is the covered index range along
/// the orthogonal axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Divider {
    pub position: f64,
    pub start: usize,
    pub end: usize,
}

/// Rebuilds the divider list for the span at `index` along `axis` into
/// `out`, overwriting pooled slots in place.
///
/// For each orthogonal position the edge between `index` and `index + 1`
/// is drawn iff the near cell shows its trailing edge or the far cell
/// shows its leading edge, and no cell's span continues across the edge.
/// A far probe beyond the last span is "no cell", never an error; it is
/// how the grid's outermost trailing boundary falls out of the same walk.
pub(crate) fn build(grid: &CrossTabGrid, axis: Axis, index: usize, out: &mut DividerBuf) {
    out.clear();

    let ortho_len = grid.len(axis.other());
    let position = grid.span(axis, index).size();
    // Index into `out` of the in-progress segment, if any.
    let mut open: Option<usize> = None;

    for i in 0..ortho_len {
        let near = grid.probe(axis, index, i);
        let far = grid.probe(axis, index + 1, i);

        let show_border = near.map_or(false, |c| c.visible && c.borders.trailing(axis))
            || far.map_or(false, |c| c.visible && c.borders.leading(axis));
        let straddled = near.map_or(false, |c| c.span_end(axis) != index);

        if straddled || !show_border {
            if let Some(slot) = open.take() {
                out[slot].end = i;
            }
        } else if open.is_none() {
            open = Some(out.len());
            out.push(Divider {
                position,
                start: i,
                end: ortho_len,
            });
        }
    }

    if let Some(slot) = open {
        out[slot].end = ortho_len;
    }

    debug!(
        "rebuilt {} divider(s) for {:?} span {}",
        out.len(),
        axis,
        index
    );
}
