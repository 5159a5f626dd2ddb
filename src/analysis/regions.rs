//! Per-region line-presence scan.
//!
//! Each named region is a fractional rectangle of the frame associated with a
//! traditional palm-line location. The scan crops the rectangle (rounded to
//! pixel bounds, clipped to the buffer), averages the Euclidean gradient
//! magnitude over the crop interior, and normalizes the mean into a [0, 1]
//! confidence. Regions are independent and read-only over the shared buffer,
//! so the four scans run in parallel.

use crate::raster::PixelBuffer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// The four fixed frame regions, in their canonical scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKey {
    PrimaryCurve,
    UpperBand,
    MidBand,
    CentralBand,
}

impl RegionKey {
    /// All keys in canonical order.
    pub const ALL: [RegionKey; 4] = [
        RegionKey::PrimaryCurve,
        RegionKey::UpperBand,
        RegionKey::MidBand,
        RegionKey::CentralBand,
    ];

    /// Traditional palm-line name used in narrative text.
    pub fn line_name(self) -> &'static str {
        match self {
            RegionKey::PrimaryCurve => "life line",
            RegionKey::UpperBand => "heart line",
            RegionKey::MidBand => "head line",
            RegionKey::CentralBand => "fate line",
        }
    }
}

/// Rectangle expressed as fractions of the buffer dimensions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RegionRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Static RegionKey → rectangle mapping, supplied as configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RegionTable {
    pub primary_curve: RegionRect,
    pub upper_band: RegionRect,
    pub mid_band: RegionRect,
    pub central_band: RegionRect,
}

impl RegionTable {
    /// Rectangle for a region key.
    pub fn rect(&self, key: RegionKey) -> RegionRect {
        match key {
            RegionKey::PrimaryCurve => self.primary_curve,
            RegionKey::UpperBand => self.upper_band,
            RegionKey::MidBand => self.mid_band,
            RegionKey::CentralBand => self.central_band,
        }
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self {
            // Life line: arc around the thumb base.
            primary_curve: RegionRect {
                x: 0.15,
                y: 0.40,
                w: 0.45,
                h: 0.45,
            },
            // Heart line: upper palm band.
            upper_band: RegionRect {
                x: 0.15,
                y: 0.20,
                w: 0.70,
                h: 0.18,
            },
            // Head line: mid palm band.
            mid_band: RegionRect {
                x: 0.15,
                y: 0.38,
                w: 0.70,
                h: 0.18,
            },
            // Fate line: vertical central column.
            central_band: RegionRect {
                x: 0.40,
                y: 0.25,
                w: 0.20,
                h: 0.55,
            },
        }
    }
}

/// Normalization and gating knobs for the scan.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionScanOptions {
    /// Mean gradient magnitude that maps to full confidence.
    pub gradient_norm: f32,
    /// Confidence above which a line counts as detected.
    pub detect_threshold: f32,
}

impl Default for RegionScanOptions {
    fn default() -> Self {
        Self {
            gradient_norm: 50.0,
            detect_threshold: 0.3,
        }
    }
}

/// Confidence band label derived from the region confidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityLabel {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl QualityLabel {
    /// Map a [0, 1] confidence to its band.
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence > 0.8 {
            QualityLabel::VeryStrong
        } else if confidence > 0.6 {
            QualityLabel::Strong
        } else if confidence > 0.4 {
            QualityLabel::Moderate
        } else {
            QualityLabel::Weak
        }
    }
}

/// Scan outcome for one region.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RegionAssessment {
    pub region: RegionKey,
    /// Normalized line-presence confidence in [0, 1].
    pub confidence: f32,
    /// `confidence > detect_threshold`.
    pub detected: bool,
    pub label: QualityLabel,
}

/// Scan all four regions. Output order follows [`RegionKey::ALL`].
pub fn scan(
    buffer: &PixelBuffer,
    table: &RegionTable,
    opts: &RegionScanOptions,
) -> Vec<RegionAssessment> {
    RegionKey::ALL
        .par_iter()
        .map(|&key| scan_one(buffer, key, table.rect(key), opts))
        .collect()
}

fn scan_one(
    buffer: &PixelBuffer,
    region: RegionKey,
    rect: RegionRect,
    opts: &RegionScanOptions,
) -> RegionAssessment {
    let confidence = mean_gradient(buffer, rect)
        .map(|mean| (mean / opts.gradient_norm).clamp(0.0, 1.0))
        .unwrap_or(0.0);

    RegionAssessment {
        region,
        confidence,
        detected: confidence > opts.detect_threshold,
        label: QualityLabel::from_confidence(confidence),
    }
}

/// Mean 2D gradient magnitude over the crop interior, or `None` when the
/// clipped crop is too small to hold an interior pixel.
fn mean_gradient(buffer: &PixelBuffer, rect: RegionRect) -> Option<f32> {
    let (w, h) = (buffer.width(), buffer.height());
    let x0 = ((rect.x * w as f32).round().max(0.0) as usize).min(w);
    let y0 = ((rect.y * h as f32).round().max(0.0) as usize).min(h);
    let x1 = (((rect.x + rect.w) * w as f32).round() as usize).min(w);
    let y1 = (((rect.y + rect.h) * h as f32).round() as usize).min(h);

    if x1.saturating_sub(x0) < 2 || y1.saturating_sub(y0) < 2 {
        return None;
    }

    let mut acc = 0.0f64;
    let mut samples = 0u64;
    for y in y0..y1 - 1 {
        for x in x0..x1 - 1 {
            let l = buffer.luma(x, y);
            let dx = buffer.luma(x + 1, y) - l;
            let dy = buffer.luma(x, y + 1) - l;
            acc += ((dx * dx + dy * dy) as f64).sqrt();
            samples += 1;
        }
    }
    Some((acc / samples as f64) as f32)
}
