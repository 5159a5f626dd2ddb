//! Coarse skin-tone presence detection.
//!
//! A pixel counts as skin-like when its dominant channel is bright enough,
//! the channel spread is wide enough, and red dominates both green and blue.
//! This is a deliberate colour heuristic, not segmentation: the output is a
//! coverage ratio and a gate on it, nothing spatial.

use crate::raster::PixelBuffer;
use serde::{Deserialize, Serialize};

/// Thresholds for the skin-tone heuristic.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceOptions {
    /// Minimum value of the brightest RGB channel.
    pub min_channel: u8,
    /// Minimum max-min spread across the RGB channels.
    pub min_spread: u8,
    /// Red must exceed blue by this factor.
    pub red_blue_ratio: f32,
    /// Coverage ratio above which a hand is considered present.
    pub detect_ratio: f32,
}

impl Default for PresenceOptions {
    fn default() -> Self {
        Self {
            min_channel: 50,
            min_spread: 15,
            red_blue_ratio: 1.2,
            detect_ratio: 0.3,
        }
    }
}

/// Coverage ratio and the presence gate derived from it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PresenceAssessment {
    /// `true` when `ratio` exceeds the configured gate.
    pub hand_detected: bool,
    /// Skin-like pixels over total pixels, in [0, 1].
    pub ratio: f32,
}

/// Scan the buffer and compute the skin-tone coverage ratio.
pub fn detect(buffer: &PixelBuffer, opts: &PresenceOptions) -> PresenceAssessment {
    let mut skin_like = 0usize;
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if is_skin_like(buffer.rgb(x, y), opts) {
                skin_like += 1;
            }
        }
    }
    let ratio = skin_like as f32 / buffer.pixel_count() as f32;
    PresenceAssessment {
        hand_detected: ratio > opts.detect_ratio,
        ratio,
    }
}

#[inline]
fn is_skin_like([r, g, b]: [u8; 3], opts: &PresenceOptions) -> bool {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    max > opts.min_channel
        && max - min > opts.min_spread
        && r > g
        && r as f32 > opts.red_blue_ratio * b as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: usize, h: usize, [r, g, b]: [u8; 3]) -> PixelBuffer {
        let mut data = Vec::with_capacity(w * h * 4);
        for _ in 0..w * h {
            data.extend_from_slice(&[r, g, b, 255]);
        }
        PixelBuffer::from_raw(w, h, data)
    }

    #[test]
    fn neutral_gray_is_never_skin_like() {
        let report = detect(&solid(8, 8, [128, 128, 128]), &PresenceOptions::default());
        assert_eq!(report.ratio, 0.0);
        assert!(!report.hand_detected);
    }

    #[test]
    fn strong_reddish_tone_is_skin_like() {
        let report = detect(&solid(8, 8, [200, 100, 80]), &PresenceOptions::default());
        assert!((report.ratio - 1.0).abs() < 1e-6);
        assert!(report.hand_detected);
    }

    #[test]
    fn dark_red_fails_the_channel_minimum() {
        let report = detect(&solid(4, 4, [45, 10, 10]), &PresenceOptions::default());
        assert_eq!(report.ratio, 0.0);
    }

    #[test]
    fn red_without_blue_margin_is_rejected() {
        // R > G but R < 1.2 * B.
        let report = detect(&solid(4, 4, [150, 120, 140]), &PresenceOptions::default());
        assert_eq!(report.ratio, 0.0);
    }

    #[test]
    fn ratio_gate_requires_strict_excess() {
        let opts = PresenceOptions::default();
        // 2x2 with exactly one skin-like pixel: ratio 0.25 stays below 0.3.
        let mut data = vec![128u8, 128, 128, 255].repeat(3);
        data.extend_from_slice(&[200, 100, 80, 255]);
        let report = detect(&PixelBuffer::from_raw(2, 2, data), &opts);
        assert!((report.ratio - 0.25).abs() < 1e-6);
        assert!(!report.hand_detected);
    }
}
