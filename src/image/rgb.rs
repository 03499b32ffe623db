/// Borrowed, read-only view over tightly packed 8-bit RGB pixel data.
///
/// `stride` is measured in pixels between row starts; the underlying byte
/// slice must hold at least `stride * h * 3` bytes.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> RgbImageU8<'a> {
    /// RGB triple at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.stride + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Row `y` as a packed RGB byte slice of length `3 * w`.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride * 3;
        &self.data[start..start + self.w * 3]
    }
}
