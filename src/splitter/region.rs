//! Rectangles, axis bookkeeping and the near-white region predicate.
//!
//! All four pipeline stages reduce to one question: is this sub-rectangle
//! uniformly near-white? Stage 1 asks it about separator bands, Stage 3
//! about single rows/columns, Stage 4 about whole crops. Keeping the answer
//! in one place keeps the stages symmetric across both axes.

use crate::image::RgbImageU8;
use serde::{Deserialize, Serialize};

/// Half-open pixel rectangle: `x0 <= x < x1`, `y0 <= y < y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Rect {
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y1 - self.y0
    }
}

/// Scan axis. `Rows` scans y coordinates (horizontal lines), `Cols` scans x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Cols,
}

impl Axis {
    /// Number of scan coordinates along this axis.
    #[inline]
    pub fn extent(self, image: &RgbImageU8) -> usize {
        match self {
            Axis::Rows => image.h,
            Axis::Cols => image.w,
        }
    }

    /// Length of a single line orthogonal to the scan direction.
    #[inline]
    pub fn ortho_extent(self, image: &RgbImageU8) -> usize {
        match self {
            Axis::Rows => image.w,
            Axis::Cols => image.h,
        }
    }

    /// Rectangle covering `thickness` consecutive lines starting at `coord`,
    /// spanning the full orthogonal extent.
    pub fn band(self, image: &RgbImageU8, coord: usize, thickness: usize) -> Rect {
        match self {
            Axis::Rows => Rect::new(0, coord, image.w, coord + thickness),
            Axis::Cols => Rect::new(coord, 0, coord + thickness, image.h),
        }
    }
}

/// True iff every channel of every pixel in `rect` strictly exceeds `min`.
///
/// `rect` must lie within the view bounds.
pub fn is_region_near_white(image: &RgbImageU8, rect: Rect, min: u8) -> bool {
    for y in rect.y0..rect.y1 {
        let row = &image.row(y)[rect.x0 * 3..rect.x1 * 3];
        if row.iter().any(|&c| c <= min) {
            return false;
        }
    }
    true
}

/// True iff the single line at `coord` is near-white across its full
/// orthogonal extent.
#[inline]
pub fn is_line_near_white(image: &RgbImageU8, axis: Axis, coord: usize, min: u8) -> bool {
    is_region_near_white(image, axis.band(image, coord, 1), min)
}

/// Mean of all three channels across the full line at `coord`.
pub fn line_mean(image: &RgbImageU8, axis: Axis, coord: usize) -> f64 {
    let ortho = axis.ortho_extent(image);
    if ortho == 0 {
        return 0.0;
    }
    let sum: u64 = match axis {
        Axis::Rows => image.row(coord).iter().map(|&c| c as u64).sum(),
        Axis::Cols => (0..ortho)
            .flat_map(|y| image.get(coord, y))
            .map(|c| c as u64)
            .sum(),
    };
    sum as f64 / (ortho * 3) as f64
}
