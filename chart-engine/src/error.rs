//! FILENAME: chart-engine/src/error.rs
//! Error types for chart building.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Meshed layout requires every series to have the same item count.
    #[error("meshed layout requires equal series lengths; series {series} has {len} items, expected {expected}")]
    InconsistentSeriesLength {
        series: usize,
        len: usize,
        expected: usize,
    },
}
