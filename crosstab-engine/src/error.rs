//! FILENAME: crosstab-engine/src/error.rs

use thiserror::Error;

use crate::span::Axis;

/// Failures of fallible structural edits on a grid.
///
/// Read accessors do not return these: an out-of-range coordinate on a read
/// path is a caller bug and panics instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("{axis:?} index {index} out of range (len {len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },

    #[error("cell overlaps existing occupant at ({row}, {col})")]
    Overlap { row: usize, col: usize },
}
