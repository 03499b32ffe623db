//! Serializable report describing one splitter run.
//!
//! The report is pure data: divider lists per axis, what happened to each
//! class of candidate cell, the accepted bounds in export order and a stage
//! timing trace. The binary can persist it as JSON next to the crops.

use crate::splitter::Rect;
use serde::{Deserialize, Serialize};

/// Timing entry for a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for the run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Outcome summary of the planning stages.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    pub image_width: usize,
    pub image_height: usize,
    /// Row (y) divider coordinates: strictly increasing, 0 .. height.
    pub row_dividers: Vec<usize>,
    /// Column (x) divider coordinates: strictly increasing, 0 .. width.
    pub col_dividers: Vec<usize>,
    /// Row-interval × column-interval candidates before tightening.
    pub cells_considered: usize,
    /// Candidates whose row or column interval had no content at all.
    pub cells_empty: usize,
    /// Tightened candidates at or below the minimum dimensions.
    pub cells_too_small: usize,
    /// Tightened, correctly sized candidates that were uniformly near-white.
    pub cells_blank: usize,
    /// Accepted bounds in export (row-major) order.
    pub accepted: Vec<Rect>,
    pub timings: TimingBreakdown,
}

impl SplitReport {
    pub fn cells_accepted(&self) -> usize {
        self.accepted.len()
    }
}
