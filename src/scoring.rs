//! Confidence fusion and accuracy scoring.
//!
//! Both derived values are computed here from one shared set of component
//! scores so the two formulas cannot drift apart:
//!
//! - `confidence` is a weighted sum in [0, 1], each term bounded before
//!   summation (quality 0.3, presence 0.25, orientation 0.2, mean region
//!   confidence 0.25).
//! - `accuracy` is a 0–98 integer built from the confidence (40 base
//!   points), a 20-point quality table, 15 points for presence, up to 15 for
//!   orientation and up to 10 for the detected-region count. The cap at 98
//!   is deliberate: the engine never reports certainty.
//!
//! The two formulas overlap but are not identical; they are kept as
//! separate, documented computations on purpose.

use crate::analysis::{OrientationClass, QualityClass, RegionAssessment};
use serde::{Deserialize, Serialize};

/// How the reading was produced, decided by the fused confidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMethod {
    HeuristicEnhanced,
    NarrativeOnly,
}

/// Both derived scores plus the method gate.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FusedScores {
    /// Weighted component fusion in [0, 1].
    pub confidence: f32,
    /// Bounded integer trust indicator in [0, 98].
    pub accuracy: u8,
    pub method: AnalysisMethod,
}

const QUALITY_WEIGHT: f32 = 0.3;
const PRESENCE_WEIGHT: f32 = 0.25;
const ORIENTATION_WEIGHT: f32 = 0.2;
const REGION_WEIGHT: f32 = 0.25;

const CONFIDENCE_POINTS: f32 = 40.0;
const QUALITY_POINTS: f32 = 20.0;
const PRESENCE_POINTS: f32 = 15.0;
const ORIENTATION_POINTS: f32 = 15.0;
const REGION_POINTS: f32 = 10.0;
const ACCURACY_CAP: u8 = 98;

const METHOD_GATE: f32 = 0.6;

fn quality_factor(class: QualityClass) -> f32 {
    match class {
        QualityClass::Poor => 0.2,
        QualityClass::Fair => 0.5,
        QualityClass::Good => 0.8,
        QualityClass::Excellent => 1.0,
    }
}

fn orientation_factor(class: OrientationClass) -> f32 {
    match class {
        OrientationClass::Correct => 1.0,
        OrientationClass::Rotated => 0.6,
        OrientationClass::Unclear => 0.3,
    }
}

/// Fuse the component signals into the confidence score, the accuracy score
/// and the analysis-method gate.
pub fn fuse(
    quality: QualityClass,
    hand_detected: bool,
    orientation: OrientationClass,
    regions: &[RegionAssessment],
) -> FusedScores {
    let q = quality_factor(quality);
    let o = orientation_factor(orientation);
    let presence = if hand_detected { 1.0 } else { 0.0 };

    let (mean_confidence, detected_ratio) = if regions.is_empty() {
        (0.0, 0.0)
    } else {
        let mean = regions.iter().map(|r| r.confidence).sum::<f32>() / regions.len() as f32;
        let detected = regions.iter().filter(|r| r.detected).count() as f32;
        (mean, detected / regions.len() as f32)
    };

    let confidence = (QUALITY_WEIGHT * q
        + PRESENCE_WEIGHT * presence
        + ORIENTATION_WEIGHT * o
        + REGION_WEIGHT * mean_confidence)
        .clamp(0.0, 1.0);

    let accuracy_raw = confidence * CONFIDENCE_POINTS
        + q * QUALITY_POINTS
        + presence * PRESENCE_POINTS
        + o * ORIENTATION_POINTS
        + detected_ratio * REGION_POINTS;
    let accuracy = (accuracy_raw.round() as u8).min(ACCURACY_CAP);

    let method = if confidence > METHOD_GATE {
        AnalysisMethod::HeuristicEnhanced
    } else {
        AnalysisMethod::NarrativeOnly
    };

    FusedScores {
        confidence,
        accuracy,
        method,
    }
}
