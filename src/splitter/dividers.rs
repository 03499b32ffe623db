//! Stage 1 (divider detection) and Stage 2 (interval partitioning).
//!
//! A divider is the starting coordinate of a near-white band at least
//! `padding_threshold` lines thick, spanning the full orthogonal extent.
//! The cheap full-line mean acts as a pre-filter before the exact band
//! check. Bands that would extend past the image edge fail rather than
//! being truncated.

use super::params::SplitParams;
use super::region::{is_region_near_white, line_mean, Axis};
use crate::image::RgbImageU8;
use log::debug;

/// Scan one axis for separator bands.
///
/// The returned list is strictly increasing, starts at 0 and ends at the
/// axis extent (for a zero-extent axis it degenerates to `[0, 0]` and
/// partitioning yields nothing). After a confirmed band the cursor skips
/// the band thickness so one gutter is not recorded line by line.
pub fn detect_dividers(image: &RgbImageU8, axis: Axis, params: &SplitParams) -> Vec<usize> {
    let extent = axis.extent(image);
    let thickness = params.band_thickness();
    let min = params.near_white_min;

    let mut dividers = vec![0usize];
    if extent == 0 || axis.ortho_extent(image) == 0 {
        dividers.push(extent);
        return dividers;
    }

    let mut coord = 0usize;
    while coord < extent {
        let is_band_start = line_mean(image, axis, coord) > min as f64
            && coord + thickness < extent
            && is_region_near_white(image, axis.band(image, coord, thickness), min);
        if is_band_start {
            if *dividers.last().unwrap() != coord {
                dividers.push(coord);
            }
            coord += thickness;
        } else {
            coord += 1;
        }
    }

    if *dividers.last().unwrap() != extent {
        dividers.push(extent);
    }
    debug!(
        "detect_dividers axis={:?} extent={} found={} dividers",
        axis,
        extent,
        dividers.len()
    );
    dividers
}

/// Form candidate intervals from consecutive divider pairs, dropping
/// degenerate (empty) ones.
pub fn partition(dividers: &[usize]) -> Vec<(usize, usize)> {
    dividers
        .windows(2)
        .map(|w| (w[0], w[1]))
        .filter(|(start, end)| start < end)
        .collect()
}
