//! Heuristic knobs for the reading pipeline.
//!
//! Defaults reproduce the reference behaviour; all thresholds are grouped
//! per stage so a caller can tune one facet without touching the rest.

use crate::analysis::{OrientationOptions, PresenceOptions, RegionScanOptions};
use serde::{Deserialize, Serialize};

/// Reader-wide parameters controlling the analysis stages.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderParams {
    /// Skin-tone presence thresholds.
    pub presence: PresenceOptions,
    /// Directional edge-count thresholds.
    pub orientation: OrientationOptions,
    /// Regional gradient normalization and detection gate.
    pub regions: RegionScanOptions,
}
