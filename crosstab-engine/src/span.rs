//! FILENAME: crosstab-engine/src/span.rs
//! Span - one row or column of a crosstab, treated uniformly.
//!
//! The grid stores an ordered list of spans per axis. A span carries its
//! size (row height / column width) and the cached divider list for its
//! trailing edge. The cache buffer doubles as the reuse pool: resetting a
//! span clears the validity flag but keeps the buffer, so the next rebuild
//! overwrites the retired divider slots in place instead of allocating.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::divider::Divider;

/// Which axis a span runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// The orthogonal axis.
    pub fn other(self) -> Axis {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }
}

/// Divider storage for one span. Most spans need only a handful of
/// segments, so the buffer lives inline.
pub(crate) type DividerBuf = SmallVec<[Divider; 4]>;

/// Cached divider list plus its validity flag.
///
/// An invalid cache still owns its buffer: those slots are the free pool
/// that the next rebuild reuses.
#[derive(Debug, Clone, Default)]
pub(crate) struct DividerCache {
    pub buf: DividerBuf,
    pub valid: bool,
}

/// One row or column of a crosstab grid.
#[derive(Debug, Clone)]
pub struct Span {
    size: f64,
    pub(crate) cache: DividerCache,
}

impl Span {
    pub(crate) fn new(size: f64) -> Self {
        Span {
            size,
            cache: DividerCache::default(),
        }
    }

    /// The span's size along its own axis (row height / column width).
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Updates the size. Divider positions are measured from this span's
    /// leading edge, so only this span's cache goes stale.
    pub(crate) fn set_size(&mut self, size: f64) {
        self.size = size;
        self.cache.valid = false;
    }

    /// Retires the cached dividers into the reuse pool.
    pub(crate) fn reset_dividers(&mut self) {
        self.cache.valid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_other_flips() {
        assert_eq!(Axis::Row.other(), Axis::Column);
        assert_eq!(Axis::Column.other(), Axis::Row);
    }

    #[test]
    fn reset_keeps_pool_buffer() {
        let mut span = Span::new(24.0);
        span.cache.buf.push(Divider {
            position: 24.0,
            start: 0,
            end: 3,
        });
        span.cache.valid = true;

        span.reset_dividers();
        assert!(!span.cache.valid);
        assert_eq!(span.cache.buf.len(), 1, "retired dividers stay pooled");
    }

    #[test]
    fn set_size_invalidates_cache() {
        let mut span = Span::new(10.0);
        span.cache.valid = true;
        span.set_size(12.5);
        assert_eq!(span.size(), 12.5);
        assert!(!span.cache.valid);
    }
}
