//! Grid splitter: a four-stage pipeline over a read-only RGB view.
//!
//! Overview
//! - Scans each axis for near-white separator bands at least
//!   `padding_threshold` lines thick ([`dividers`]).
//! - Partitions each axis into coarse intervals between consecutive
//!   dividers.
//! - Tightens every interval inward to its first/last content line
//!   ([`tighten`]).
//! - Validates the resulting cells (minimum size, non-blankness) and
//!   exports each accepted crop in row-major scan order ([`pipeline`]).
//!
//! Key Ideas
//! - Every stage reduces to one primitive: "is this sub-rectangle uniformly
//!   near-white?" ([`region::is_region_near_white`]). Row and column logic
//!   is the same code parameterized by [`region::Axis`].
//! - Tightening happens per axis interval; a cell inherits the tightened
//!   bounds of its row and column intervals.
//! - Empty and undersized cells are normal skip outcomes, counted in the
//!   report but never treated as errors.

pub mod dividers;
pub mod params;
pub mod pipeline;
pub mod region;
pub mod tighten;

pub use dividers::{detect_dividers, partition};
pub use params::SplitParams;
pub use pipeline::{ExportFailure, GridSplitter, SplitOutcome, SplitPlan};
pub use region::{is_region_near_white, Axis, Rect};
pub use tighten::tighten_interval;
