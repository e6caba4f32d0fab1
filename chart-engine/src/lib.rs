//! FILENAME: chart-engine/src/lib.rs
//! Chart data-binding subsystem.
//!
//! This crate turns declared series plus caller-owned data groups into
//! drawable aggregates: memoized item values, sections with value
//! envelopes and normalized bar placement, and round-numbered value-axis
//! ticks.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the chart IS)
//! - `dataset`: The key-evaluation seam to the caller's data model
//! - `series`: Bound series and lazy per-item values
//! - `section`: Grouping, value envelopes, bar placement
//! - `intervals`: Value-axis tick selection
//!
//! Rendering is out of scope; callers receive values, fractions of a
//! normalized band, and tick positions.

pub mod dataset;
pub mod definition;
pub mod error;
pub mod intervals;
pub mod section;
pub mod series;

pub use dataset::KeyPathEvaluator;
pub use definition::{ChartStyle, SectionLayout, SeriesSpec};
pub use error::ChartError;
pub use intervals::{intervals, AxisIntervalSelector};
pub use section::{sections, ItemBounds, ItemRef, Section};
pub use series::{Chart, Series, SeriesItem};
