//! Error types for the splitting pipeline.
//!
//! Only two failure classes touch the outside world: decoding the source
//! image and writing an individual crop. Everything in between is pure
//! computation; empty or undersized cells are normal skip outcomes, not
//! errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the splitter.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Source image missing or undecodable. Aborts the run; nothing is
    /// written.
    #[error("failed to load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    /// A single output file could not be written. Local to one cell; the
    /// remaining cells are still exported.
    #[error("failed to export {}: {reason}", .path.display())]
    Export { path: PathBuf, reason: String },
}

/// Result alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitError>;
