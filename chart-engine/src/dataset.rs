//! FILENAME: chart-engine/src/dataset.rs
//! Dataset access seam.
//!
//! The chart never sees the caller's data model directly; it evaluates a
//! series' key against each group through this trait. Any closure of the
//! right shape works, so tests and adapters stay lightweight.

/// Resolves a series key against one data group.
///
/// `None` means the group has no value under that key; the chart treats
/// the item as zero.
pub trait KeyPathEvaluator<G> {
    fn evaluate(&self, group: &G, key: &str) -> Option<f64>;
}

impl<G, F> KeyPathEvaluator<G> for F
where
    F: Fn(&G, &str) -> Option<f64>,
{
    fn evaluate(&self, group: &G, key: &str) -> Option<f64> {
        self(group, key)
    }
}
