//! Parameter types configuring the splitting stages.
//!
//! Defaults match common scan layouts: thin white gutters around cells of at
//! least thumbnail size. For tuning, start with `padding_threshold` (gutter
//! thickness) and only then touch the near-white level.

/// Splitter-wide parameters controlling all four stages.
#[derive(Clone, Copy, Debug)]
pub struct SplitParams {
    /// A channel value must strictly exceed this for a pixel to count as
    /// near-white.
    pub near_white_min: u8,
    /// Minimum separator band thickness in pixels (>=1; 0 is treated as 1).
    pub padding_threshold: usize,
    /// A cell is kept only when strictly wider than this.
    pub min_width: usize,
    /// A cell is kept only when strictly taller than this.
    pub min_height: usize,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            near_white_min: 240,
            padding_threshold: 5,
            min_width: 50,
            min_height: 50,
        }
    }
}

impl SplitParams {
    /// Effective band thickness; guards against a zero configuration value.
    pub(crate) fn band_thickness(&self) -> usize {
        self.padding_threshold.max(1)
    }
}
