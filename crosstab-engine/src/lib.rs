//! FILENAME: crosstab-engine/src/lib.rs
//! Crosstab layout subsystem.
//!
//! This crate derives grid-line geometry from a crosstab's cell occupancy:
//! rows and columns are uniform [`Span`]s, cells cover rectangular ranges
//! of positions, and the divider walk turns per-edge border flags into
//! merged, cached border segments ready for a painting collaborator.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the crosstab IS)
//! - `span` / `cell`: The structural model
//! - `grid`: Ownership, occupancy index, structural edits
//! - `divider`: The trailing-edge segment walk and its pooled cache
//!
//! No painting, hit-testing, or persistence happens here; callers receive
//! index ranges plus span-relative positions and render them however they
//! like.

pub mod cell;
pub mod definition;
pub mod divider;
pub mod error;
pub mod grid;
pub mod span;

pub use cell::{Cell, EdgeBorders};
pub use definition::CrossTabDef;
pub use divider::Divider;
pub use error::GridError;
pub use grid::{CellId, CrossTabGrid};
pub use span::{Axis, Span};
