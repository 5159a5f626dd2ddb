//! The final report returned by a pipeline invocation.

use crate::analysis::{RegionKey, VisionAnalysis};
use crate::scoring::AnalysisMethod;
use serde::Serialize;

/// Narrative text for one region.
#[derive(Clone, Debug, Serialize)]
pub struct RegionNarrative {
    pub region: RegionKey,
    pub text: String,
}

/// Immutable structured reading: one [`VisionAnalysis`], one narrative per
/// region, an overall narrative and the bounded trust indicator.
///
/// Ownership transfers entirely to the caller; the engine retains nothing
/// after assembly.
#[derive(Clone, Debug, Serialize)]
pub struct Reading {
    pub analysis: VisionAnalysis,
    /// One entry per region, in [`RegionKey::ALL`] order.
    pub region_narratives: Vec<RegionNarrative>,
    pub overall_narrative: String,
    /// Integer trust indicator in [0, 98]; never reports certainty.
    pub accuracy_score: u8,
    pub analysis_method: AnalysisMethod,
    /// Wall-clock time spent assembling this reading.
    pub latency_ms: f64,
}
