//! The splitter orchestrating divider detection, partitioning, tightening
//! and export.
//!
//! Planning (stages 1–3 plus validation) is pure computation over the
//! borrowed pixel view and is exposed separately from the filesystem side,
//! so tests and callers can inspect the accepted bounds without touching
//! disk.

use super::dividers::{detect_dividers, partition};
use super::params::SplitParams;
use super::region::{is_region_near_white, Axis, Rect};
use super::tighten::tighten_interval;
use crate::diagnostics::{SplitReport, TimingBreakdown};
use crate::error::{Result, SplitError};
use crate::image::io::{load_rgb_image, save_rgb_region};
use crate::image::RgbImageU8;
use log::{debug, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of the pure planning stages.
#[derive(Clone, Debug)]
pub struct SplitPlan {
    /// Accepted cell bounds in export (row-major) order.
    pub cells: Vec<Rect>,
    pub report: SplitReport,
}

/// A single crop that could not be written.
#[derive(Clone, Debug)]
pub struct ExportFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a full split run including filesystem effects.
#[derive(Clone, Debug)]
pub struct SplitOutcome {
    /// Paths written, in index order.
    pub saved: Vec<PathBuf>,
    /// Crops that failed to export; the run continued past them.
    pub failures: Vec<ExportFailure>,
    pub report: SplitReport,
}

impl SplitOutcome {
    /// Number of images persisted.
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }
}

/// Grid splitter: detects near-white gutters, tightens the resulting cells
/// and exports each accepted crop.
pub struct GridSplitter {
    params: SplitParams,
}

impl GridSplitter {
    /// Create a splitter with the supplied parameters.
    pub fn new(params: SplitParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SplitParams {
        &self.params
    }

    /// Run stages 1–4 (without export) and return the accepted cells plus a
    /// report.
    pub fn plan(&self, image: RgbImageU8) -> SplitPlan {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        debug!("GridSplitter::plan start w={} h={}", image.w, image.h);

        let detect_start = Instant::now();
        let row_dividers = detect_dividers(&image, Axis::Rows, &self.params);
        let col_dividers = detect_dividers(&image, Axis::Cols, &self.params);
        timings.push("detect", detect_start.elapsed().as_secs_f64() * 1000.0);

        let row_intervals = partition(&row_dividers);
        let col_intervals = partition(&col_dividers);

        let tighten_start = Instant::now();
        let rows = self.tighten_axis(&image, Axis::Rows, &row_intervals);
        let cols = self.tighten_axis(&image, Axis::Cols, &col_intervals);
        timings.push("tighten", tighten_start.elapsed().as_secs_f64() * 1000.0);

        let cells_considered = row_intervals.len() * col_intervals.len();
        let mut cells_empty = 0usize;
        let mut cells_too_small = 0usize;

        // Cross product in scan order: top-to-bottom rows, left-to-right
        // within each row.
        let mut sized: Vec<Rect> = Vec::new();
        for row in &rows {
            for col in &cols {
                let ((y0, y1), (x0, x1)) = match (row, col) {
                    (Some(r), Some(c)) => (*r, *c),
                    _ => {
                        cells_empty += 1;
                        continue;
                    }
                };
                let rect = Rect::new(x0, y0, x1, y1);
                if rect.width() <= self.params.min_width
                    || rect.height() <= self.params.min_height
                {
                    cells_too_small += 1;
                    continue;
                }
                sized.push(rect);
            }
        }

        // Cells are independent here; the blankness re-check is the only
        // per-cell full scan left, so it runs in parallel.
        let validate_start = Instant::now();
        let min = self.params.near_white_min;
        let blank_flags: Vec<bool> = sized
            .par_iter()
            .map(|rect| is_region_near_white(&image, *rect, min))
            .collect();
        timings.push("validate", validate_start.elapsed().as_secs_f64() * 1000.0);

        let mut cells_blank = 0usize;
        let mut accepted: Vec<Rect> = Vec::new();
        for (rect, blank) in sized.into_iter().zip(blank_flags) {
            if blank {
                cells_blank += 1;
            } else {
                accepted.push(rect);
            }
        }

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "GridSplitter::plan done considered={} empty={} too_small={} blank={} accepted={}",
            cells_considered,
            cells_empty,
            cells_too_small,
            cells_blank,
            accepted.len()
        );

        let report = SplitReport {
            image_width: image.w,
            image_height: image.h,
            row_dividers,
            col_dividers,
            cells_considered,
            cells_empty,
            cells_too_small,
            cells_blank,
            accepted: accepted.clone(),
            timings,
        };
        SplitPlan {
            cells: accepted,
            report,
        }
    }

    /// Plan and export every accepted cell into `out_dir` (created
    /// recursively).
    ///
    /// A failed write is recorded in the outcome and the remaining cells
    /// are still exported; only a failure to create the directory itself
    /// aborts.
    pub fn split_to_dir(&self, image: RgbImageU8, out_dir: &Path) -> Result<SplitOutcome> {
        fs::create_dir_all(out_dir).map_err(|e| SplitError::Export {
            path: out_dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let plan = self.plan(image);
        let export_start = Instant::now();
        let mut saved = Vec::new();
        let mut failures = Vec::new();
        for (index, rect) in plan.cells.iter().enumerate() {
            let path = out_dir.join(format!("image_{index:03}.png"));
            match save_rgb_region(image, *rect, &path) {
                Ok(()) => {
                    debug!("saved {}", path.display());
                    saved.push(path);
                }
                Err(err) => {
                    warn!("{err}");
                    failures.push(ExportFailure {
                        path,
                        reason: err.to_string(),
                    });
                }
            }
        }

        let mut report = plan.report;
        report
            .timings
            .push("export", export_start.elapsed().as_secs_f64() * 1000.0);
        Ok(SplitOutcome {
            saved,
            failures,
            report,
        })
    }

    /// Load `input`, normalize to RGB8 and split into `out_dir`.
    pub fn split_image_file(&self, input: &Path, out_dir: &Path) -> Result<SplitOutcome> {
        let buffer = load_rgb_image(input)?;
        self.split_to_dir(buffer.as_view(), out_dir)
    }

    fn tighten_axis(
        &self,
        image: &RgbImageU8,
        axis: Axis,
        intervals: &[(usize, usize)],
    ) -> Vec<Option<(usize, usize)>> {
        let last = intervals.len().saturating_sub(1);
        intervals
            .iter()
            .enumerate()
            .map(|(i, &(start, end))| {
                tighten_interval(image, axis, start, end, i == last, self.params.near_white_min)
            })
            .collect()
    }
}
