#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod splitter;

// --- High-level re-exports -------------------------------------------------

// Main entry points: splitter + results.
pub use crate::splitter::{GridSplitter, SplitOutcome, SplitParams, SplitPlan};

// Error taxonomy and run report.
pub use crate::diagnostics::SplitReport;
pub use crate::error::SplitError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use grid_splitter::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<(), SplitError> {
/// let splitter = GridSplitter::new(SplitParams::default());
/// let outcome = splitter.split_image_file(Path::new("sheet.png"), Path::new("out"))?;
/// println!("saved={}", outcome.saved_count());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{RgbImageBuffer, RgbImageU8};
    pub use crate::{GridSplitter, SplitError, SplitOutcome, SplitParams};
}
