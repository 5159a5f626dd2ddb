//! Global image-quality assessment from brightness and contrast statistics.
//!
//! Brightness is the mean luma over every pixel. The contrast proxy is the
//! mean absolute luma difference between each pixel and its right and below
//! neighbours, averaged over all interior pixels. Both feed an ordered,
//! first-match classification; a buffer too small to have interior pixels
//! contributes zero contrast rather than a division by zero.

use crate::raster::PixelBuffer;
use serde::{Deserialize, Serialize};

/// Ordered quality category derived from global statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityClass {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Global statistics plus the class they map to.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct QualityAssessment {
    pub class: QualityClass,
    /// Mean luma over the whole buffer.
    pub brightness: f32,
    /// Mean absolute neighbour luma difference over interior pixels.
    pub contrast: f32,
}

/// Classification bands, applied in order; first match wins.
const BANDS: [(QualityClass, f32, f32, f32); 3] = [
    (QualityClass::Excellent, 50.0, 200.0, 15.0),
    (QualityClass::Good, 30.0, 220.0, 10.0),
    (QualityClass::Fair, 20.0, 235.0, 5.0),
];

/// Compute brightness/contrast statistics and classify the buffer.
pub fn assess(buffer: &PixelBuffer) -> QualityAssessment {
    let brightness = mean_luma(buffer);
    let contrast = neighbour_contrast(buffer);

    let class = BANDS
        .iter()
        .find(|(_, lo, hi, min_contrast)| {
            brightness > *lo && brightness < *hi && contrast > *min_contrast
        })
        .map(|(class, _, _, _)| *class)
        .unwrap_or(QualityClass::Poor);

    QualityAssessment {
        class,
        brightness,
        contrast,
    }
}

fn mean_luma(buffer: &PixelBuffer) -> f32 {
    let mut acc = 0.0f64;
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            acc += buffer.luma(x, y) as f64;
        }
    }
    (acc / buffer.pixel_count() as f64) as f32
}

fn neighbour_contrast(buffer: &PixelBuffer) -> f32 {
    let (w, h) = (buffer.width(), buffer.height());
    if w < 2 || h < 2 {
        return 0.0;
    }
    let mut acc = 0.0f64;
    let mut samples = 0u64;
    for y in 0..h - 1 {
        for x in 0..w - 1 {
            let l = buffer.luma(x, y);
            acc += (l - buffer.luma(x + 1, y)).abs() as f64;
            acc += (l - buffer.luma(x, y + 1)).abs() as f64;
            samples += 2;
        }
    }
    (acc / samples as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(w: usize, h: usize, luma: u8) -> PixelBuffer {
        let mut data = Vec::with_capacity(w * h * 4);
        for _ in 0..w * h {
            data.extend_from_slice(&[luma, luma, luma, 255]);
        }
        PixelBuffer::from_raw(w, h, data)
    }

    #[test]
    fn quality_classes_are_ordered() {
        assert!(QualityClass::Poor < QualityClass::Fair);
        assert!(QualityClass::Fair < QualityClass::Good);
        assert!(QualityClass::Good < QualityClass::Excellent);
    }

    #[test]
    fn uniform_buffer_has_zero_contrast_and_classifies_poor() {
        let report = assess(&gray(16, 16, 128));
        assert!((report.brightness - 128.0).abs() < 1e-3);
        assert!(report.contrast.abs() < 1e-6);
        assert_eq!(report.class, QualityClass::Poor);
    }

    #[test]
    fn single_pixel_buffer_defaults_contrast_without_panicking() {
        let report = assess(&gray(1, 1, 128));
        assert_eq!(report.contrast, 0.0);
        assert_eq!(report.class, QualityClass::Poor);
    }

    #[test]
    fn high_contrast_midtone_buffer_is_excellent() {
        // Alternate dark/bright columns: brightness ~126, contrast well over 15.
        let (w, h) = (32, 32);
        let mut data = Vec::with_capacity(w * h * 4);
        for _y in 0..h {
            for x in 0..w {
                let v = if x % 2 == 0 { 64u8 } else { 188u8 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let report = assess(&PixelBuffer::from_raw(w, h, data));
        assert_eq!(report.class, QualityClass::Excellent);
    }

    #[test]
    fn very_dark_buffer_with_texture_is_poor() {
        let (w, h) = (16, 16);
        let mut data = Vec::with_capacity(w * h * 4);
        for y in 0..h {
            for _x in 0..w {
                let v = if y % 2 == 0 { 2u8 } else { 30u8 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let report = assess(&PixelBuffer::from_raw(w, h, data));
        // Brightness ~16 sits below every band's lower bound.
        assert_eq!(report.class, QualityClass::Poor);
    }
}
