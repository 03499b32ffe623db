//! I/O helpers for RGB images.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned 8-bit RGB buffer,
//!   normalizing whatever color mode the file uses (palette, gray, alpha).
//! - `save_rgb_region`: write a rectangular crop of a view to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::RgbImageU8;
use crate::error::SplitError;
use crate::splitter::Rect;
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImageBuffer {
    /// Construct an owned RGB buffer from tightly packed bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `RgbImageU8` view
    pub fn as_view(&self) -> RgbImageU8<'_> {
        RgbImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk and normalize to 8-bit RGB without alpha.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageBuffer, SplitError> {
    let img = image::open(path)
        .map_err(|e| SplitError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(RgbImageBuffer::new(width, height, data))
}

/// Save the `rect` crop of `image` to a PNG at `path`.
///
/// `rect` must lie within the view bounds.
pub fn save_rgb_region(image: RgbImageU8, rect: Rect, path: &Path) -> Result<(), SplitError> {
    let mut out = RgbImage::new(rect.width() as u32, rect.height() as u32);
    for (dy, y) in (rect.y0..rect.y1).enumerate() {
        let row = &image.row(y)[rect.x0 * 3..rect.x1 * 3];
        for (dx, px) in row.chunks_exact(3).enumerate() {
            out.put_pixel(dx as u32, dy as u32, image::Rgb([px[0], px[1], px[2]]));
        }
    }
    out.save(path).map_err(|e| SplitError::Export {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
