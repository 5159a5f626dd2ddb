//! Owned RGBA pixel buffer in row-major layout.
//!
//! The buffer is decoded once per invocation and is read-only afterwards;
//! every analysis stage shares it by reference. Invariants: `w > 0`,
//! `h > 0`, `data.len() == w * h * 4`.

/// Decoded raster image: width, height and flat RGBA samples.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    /// Image width in pixels
    w: usize,
    /// Image height in pixels
    h: usize,
    /// Backing storage, four bytes per pixel in row-major order
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Construct a buffer from raw RGBA samples.
    ///
    /// Panics if `data.len() != w * h * 4`; dimension validation against the
    /// zero case happens at decode time.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), w * h * 4, "RGBA sample count must match dimensions");
        Self { w, h, data }
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.w * self.h
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * 4
    }

    /// RGB channels at (x, y).
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.idx(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Brightness proxy at (x, y): mean of the R, G, B channels.
    #[inline]
    pub fn luma(&self, x: usize, y: usize) -> f32 {
        let [r, g, b] = self.rgb(x, y);
        (r as f32 + g as f32 + b as f32) / 3.0
    }

    /// Raw RGBA samples.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.data
    }
}
