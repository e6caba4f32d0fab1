//! FILENAME: chart-engine/src/section.rs
//! Section grouping and value envelopes.
//!
//! Sections are the drawable groups of a chart: one per series in
//! Separated layout, one per item index in Meshed layout. Each section
//! carries its value envelope (total, min, max) and can place its bars on
//! a normalized 0..1 band.

use log::debug;

use crate::dataset::KeyPathEvaluator;
use crate::definition::{ChartStyle, SectionLayout};
use crate::error::ChartError;
use crate::series::Chart;

/// Points back at one item: which series it came from, its index within
/// that series, and the resolved value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRef {
    pub series: usize,
    pub item: usize,
    pub value: f64,
}

/// Normalized placement of one bar on a section's 0..1 band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    /// Leading edge, as a fraction of the section width.
    pub offset: f64,
    /// Bar width, as a fraction of the section width.
    pub width: f64,
}

/// One drawable group of items with its aggregated value envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    style: ChartStyle,
    refs: Vec<ItemRef>,
    total: f64,
    min: f64,
    max: f64,
}

impl Section {
    fn build(style: ChartStyle, refs: Vec<ItemRef>) -> Self {
        let mut total = 0.0;
        let mut min = 0.0;
        let mut max = 0.0;
        for (i, r) in refs.iter().enumerate() {
            total += r.value;
            if style.stacked {
                // Stacked bars draw end to end, so the envelope follows
                // the running sum rather than the raw values.
                min = total;
                max = total;
            } else if i == 0 {
                min = r.value;
                max = r.value;
            } else {
                min = min.min(r.value);
                max = max.max(r.value);
            }
        }
        Section {
            style,
            refs,
            total,
            min,
            max,
        }
    }

    pub fn items(&self) -> &[ItemRef] {
        &self.refs
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Placement of bar `index` on the section's normalized band. The
    /// band holds `len()` bars separated by `bar_gap` fractions of a bar
    /// width, with half of `set_gap` as margin on each side.
    ///
    /// # Panics
    /// Panics when `index` is out of range.
    pub fn item_bounds(&self, index: usize) -> ItemBounds {
        assert!(
            index < self.refs.len(),
            "item index {index} out of range for section of {}",
            self.refs.len()
        );
        let n = self.refs.len() as f64;
        let effective = n + (n - 1.0) * self.style.bar_gap + self.style.set_gap;
        ItemBounds {
            offset: (self.style.set_gap / 2.0 + index as f64 * (1.0 + self.style.bar_gap))
                / effective,
            width: 1.0 / effective,
        }
    }
}

/// Groups the chart's items into sections per its layout.
///
/// Separated yields one section per series. Meshed yields one section per
/// item index and fails fast when series lengths differ.
pub fn sections<G, E: KeyPathEvaluator<G>>(
    chart: &Chart<'_, G, E>,
) -> Result<Vec<Section>, ChartError> {
    let style = chart.style();
    let series = chart.series();
    let out: Vec<Section> = match chart.layout() {
        SectionLayout::Separated => series
            .iter()
            .enumerate()
            .map(|(s, ser)| {
                let refs = (0..ser.len())
                    .map(|i| ItemRef {
                        series: s,
                        item: i,
                        value: chart.value(s, i),
                    })
                    .collect();
                Section::build(style, refs)
            })
            .collect(),
        SectionLayout::Meshed => {
            let expected = series.first().map_or(0, |s| s.len());
            for (idx, s) in series.iter().enumerate() {
                if s.len() != expected {
                    return Err(ChartError::InconsistentSeriesLength {
                        series: idx,
                        len: s.len(),
                        expected,
                    });
                }
            }
            (0..expected)
                .map(|i| {
                    let refs = (0..series.len())
                        .map(|s| ItemRef {
                            series: s,
                            item: i,
                            value: chart.value(s, i),
                        })
                        .collect();
                    Section::build(style, refs)
                })
                .collect()
        }
    };
    debug!("built {} section(s)", out.len());
    Ok(out)
}
