//! Error taxonomy for the reading pipeline.
//!
//! Only the raster loader can fail. Every stage past decoding is a total
//! function over a valid [`PixelBuffer`](crate::raster::PixelBuffer):
//! degraded input is expressed through classification (`Poor` quality,
//! `hand_detected = false`), never through an error. Low confidence is a
//! valid outcome.

use thiserror::Error;

/// Failure modes of a single pipeline invocation.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// The input bytes could not be parsed as an image. Unrecoverable here;
    /// a re-capture belongs to the acquisition side.
    #[error("failed to decode input image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The image decoded, but with degenerate dimensions.
    #[error("decoded image has degenerate dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },
}
