//! FILENAME: chart-engine/src/series.rs
//! Series binding and per-item value memoization.
//!
//! A [`Chart`] binds declared series to borrowed data groups. Item values
//! are computed lazily through the caller's [`KeyPathEvaluator`] and
//! memoized, so repeated section builds never re-run key resolution.

use log::debug;
use once_cell::unsync::OnceCell;

use crate::dataset::KeyPathEvaluator;
use crate::definition::{ChartStyle, SectionLayout, SeriesSpec};

/// One data point: a borrowed group plus its memoized value.
#[derive(Debug)]
pub struct SeriesItem<'a, G> {
    group: &'a G,
    cached: OnceCell<f64>,
}

impl<'a, G> SeriesItem<'a, G> {
    fn new(group: &'a G) -> Self {
        SeriesItem {
            group,
            cached: OnceCell::new(),
        }
    }

    pub fn group(&self) -> &'a G {
        self.group
    }

    /// The item's value under `key`. Groups with no value under the key
    /// count as zero. The first call evaluates; later calls return the
    /// memoized result.
    pub fn value<E: KeyPathEvaluator<G>>(&self, key: &str, evaluator: &E) -> f64 {
        *self
            .cached
            .get_or_init(|| evaluator.evaluate(self.group, key).unwrap_or(0.0))
    }
}

/// One bound series: its declaration plus one item per data group.
#[derive(Debug)]
pub struct Series<'a, G> {
    spec: SeriesSpec,
    items: Vec<SeriesItem<'a, G>>,
}

impl<'a, G> Series<'a, G> {
    pub fn spec(&self) -> &SeriesSpec {
        &self.spec
    }

    pub fn title(&self) -> &str {
        &self.spec.title
    }

    pub fn key(&self) -> &str {
        &self.spec.key
    }

    pub fn items(&self) -> &[SeriesItem<'a, G>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The live chart: bound series, an evaluator, and the style that governs
/// section aggregation.
pub struct Chart<'a, G, E> {
    evaluator: E,
    series: Vec<Series<'a, G>>,
    style: ChartStyle,
    layout: SectionLayout,
}

impl<'a, G, E: KeyPathEvaluator<G>> Chart<'a, G, E> {
    /// Starts an empty chart; series are added with [`push_series`].
    ///
    /// [`push_series`]: Chart::push_series
    pub fn new(evaluator: E, style: ChartStyle, layout: SectionLayout) -> Self {
        Chart {
            evaluator,
            series: Vec::new(),
            style,
            layout,
        }
    }

    /// Binds `specs` to `groups`: every series gets one item per group,
    /// in group order.
    pub fn bind(
        specs: Vec<SeriesSpec>,
        groups: &'a [G],
        evaluator: E,
        style: ChartStyle,
        layout: SectionLayout,
    ) -> Self {
        let mut chart = Chart::new(evaluator, style, layout);
        for spec in specs {
            chart.push_series(spec, groups);
        }
        debug!(
            "bound {} series over {} group(s), layout {:?}",
            chart.series.len(),
            groups.len(),
            layout
        );
        chart
    }

    /// Appends one series bound to its own group slice. Series bound this
    /// way may differ in length; Meshed section building rejects that.
    pub fn push_series(&mut self, spec: SeriesSpec, groups: &'a [G]) {
        self.series.push(Series {
            spec,
            items: groups.iter().map(SeriesItem::new).collect(),
        });
    }

    pub fn series(&self) -> &[Series<'a, G>] {
        &self.series
    }

    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn layout(&self) -> SectionLayout {
        self.layout
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// The memoized value of item `index` in series `series`.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    pub fn value(&self, series: usize, index: usize) -> f64 {
        let s = &self.series[series];
        s.items[index].value(&s.spec.key, &self.evaluator)
    }

    /// Rebinds the group at `index` in every series and drops the
    /// memoized values it backed. Other items keep their caches.
    ///
    /// # Panics
    /// Panics when `index` is out of range for any series.
    pub fn replace_group(&mut self, index: usize, group: &'a G) {
        for s in &mut self.series {
            s.items[index] = SeriesItem::new(group);
        }
        debug!("replaced group {index} across {} series", self.series.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell as StdCell;
    use std::collections::HashMap;

    type Group = HashMap<&'static str, f64>;

    fn group(pairs: &[(&'static str, f64)]) -> Group {
        pairs.iter().copied().collect()
    }

    fn lookup(g: &Group, key: &str) -> Option<f64> {
        g.get(key).copied()
    }

    #[test]
    fn values_follow_spec_keys_per_group() {
        let groups = vec![
            group(&[("sales", 10.0), ("cost", 4.0)]),
            group(&[("sales", 20.0), ("cost", 7.0)]),
        ];
        let chart = Chart::bind(
            vec![
                SeriesSpec::new("Sales", "sales"),
                SeriesSpec::new("Cost", "cost"),
            ],
            &groups,
            lookup,
            ChartStyle::default(),
            SectionLayout::Separated,
        );

        assert_eq!(chart.value(0, 0), 10.0);
        assert_eq!(chart.value(0, 1), 20.0);
        assert_eq!(chart.value(1, 0), 4.0);
        assert_eq!(chart.value(1, 1), 7.0);
    }

    #[test]
    fn missing_keys_count_as_zero() {
        let groups = vec![group(&[("sales", 10.0)])];
        let chart = Chart::bind(
            vec![SeriesSpec::new("Profit", "profit")],
            &groups,
            lookup,
            ChartStyle::default(),
            SectionLayout::Separated,
        );
        assert_eq!(chart.value(0, 0), 0.0);
    }

    #[test]
    fn evaluation_runs_once_per_item() {
        let calls = StdCell::new(0usize);
        let groups = vec![group(&[("v", 3.0)]), group(&[("v", 5.0)])];
        let chart = Chart::bind(
            vec![SeriesSpec::new("V", "v")],
            &groups,
            |g: &Group, key: &str| {
                calls.set(calls.get() + 1);
                g.get(key).copied()
            },
            ChartStyle::default(),
            SectionLayout::Separated,
        );

        for _ in 0..3 {
            assert_eq!(chart.value(0, 0), 3.0);
            assert_eq!(chart.value(0, 1), 5.0);
        }
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn replace_group_drops_only_that_items_cache() {
        let calls = StdCell::new(0usize);
        let groups = vec![group(&[("v", 1.0)]), group(&[("v", 2.0)])];
        let replacement = group(&[("v", 9.0)]);
        let mut chart = Chart::bind(
            vec![SeriesSpec::new("V", "v")],
            &groups,
            |g: &Group, key: &str| {
                calls.set(calls.get() + 1);
                g.get(key).copied()
            },
            ChartStyle::default(),
            SectionLayout::Separated,
        );

        assert_eq!(chart.value(0, 0), 1.0);
        assert_eq!(chart.value(0, 1), 2.0);
        assert_eq!(calls.get(), 2);

        chart.replace_group(1, &replacement);
        assert_eq!(chart.value(0, 0), 1.0);
        assert_eq!(chart.value(0, 1), 9.0);
        // Item 0 stayed memoized; item 1 re-evaluated once.
        assert_eq!(calls.get(), 3);
    }
}
