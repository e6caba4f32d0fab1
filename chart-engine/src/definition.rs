//! FILENAME: chart-engine/src/definition.rs
//! Chart Definition - the serializable configuration.
//!
//! These types describe what a chart binds and how its sections are laid
//! out; they carry no data and no geometry.

use serde::{Deserialize, Serialize};

/// One declared series: a display title and the key evaluated against
/// each data group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub title: String,
    pub key: String,
}

impl SeriesSpec {
    pub fn new(title: impl Into<String>, key: impl Into<String>) -> Self {
        SeriesSpec {
            title: title.into(),
            key: key.into(),
        }
    }
}

/// How items are grouped into sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionLayout {
    /// One section per series, holding all of that series' items.
    Separated,
    /// One section per item index, holding that index's item from every
    /// series. Requires equal item counts across series.
    Meshed,
}

impl Default for SectionLayout {
    fn default() -> Self {
        SectionLayout::Separated
    }
}

/// Caller-supplied style fractions controlling aggregation and bar
/// spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Stacked charts accumulate values; min/max track the running sum.
    pub stacked: bool,

    /// Spacing between bars within a section, as a fraction of one bar
    /// width.
    pub bar_gap: f64,

    /// Spacing around a section's group of bars, as a fraction of one bar
    /// width (half on each side).
    pub set_gap: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            stacked: false,
            bar_gap: 0.0,
            set_gap: 0.0,
        }
    }
}
