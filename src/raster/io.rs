//! I/O helpers: image decoding and JSON report output.
//!
//! - `decode_rgba`: parse encoded bytes (PNG/JPEG/etc.) into a [`PixelBuffer`].
//! - `load_image`: read and decode an image file from disk.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::PixelBuffer;
use crate::error::ReadingError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Decode encoded image bytes into an owned RGBA buffer.
///
/// This is the single failure point of the pipeline: parse errors surface as
/// [`ReadingError::ImageDecode`], degenerate decoded dimensions as
/// [`ReadingError::InvalidImage`].
pub fn decode_rgba(bytes: &[u8]) -> Result<PixelBuffer, ReadingError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ReadingError::InvalidImage { width, height });
    }
    Ok(PixelBuffer::from_raw(
        width as usize,
        height as usize,
        rgba.into_raw(),
    ))
}

/// Load an image from disk and decode it to RGBA.
pub fn load_image(path: &Path) -> Result<PixelBuffer, ReadingError> {
    let decoded = image::open(path)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ReadingError::InvalidImage { width, height });
    }
    Ok(PixelBuffer::from_raw(
        width as usize,
        height as usize,
        rgba.into_raw(),
    ))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_byte_input_is_a_decode_error() {
        let err = decode_rgba(&[]).unwrap_err();
        assert!(matches!(err, ReadingError::ImageDecode(_)));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let err = decode_rgba(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ReadingError::ImageDecode(_)));
    }
}
