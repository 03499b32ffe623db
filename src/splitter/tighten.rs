//! Stage 3: tightening coarse intervals to their actual content.
//!
//! A coarse interval starts at a divider, so its leading lines are usually
//! the tail of a gutter and (except for the last interval on an axis) its
//! trailing lines are the head of the next gutter. Both ends are moved
//! inward to the first/last line containing any non-near-white pixel across
//! the full orthogonal extent.

use super::region::{is_line_near_white, Axis};
use crate::image::RgbImageU8;

/// Shrink `[start, end)` to its content lines.
///
/// Returns `None` when the interval is uniformly near-white. For the last
/// interval on an axis only the start is tightened; the end stays at the
/// axis extent.
pub fn tighten_interval(
    image: &RgbImageU8,
    axis: Axis,
    start: usize,
    end: usize,
    is_last: bool,
    near_white_min: u8,
) -> Option<(usize, usize)> {
    let first = (start..end).find(|&c| !is_line_near_white(image, axis, c, near_white_min))?;
    if is_last {
        return Some((first, end));
    }
    // The rev-scan includes `first`, so it always finds a line.
    let last = (first..end)
        .rev()
        .find(|&c| !is_line_near_white(image, axis, c, near_white_min))
        .unwrap_or(first);
    Some((first, last + 1))
}
