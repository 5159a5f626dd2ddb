//! Pixel-level analysis stages.
//!
//! Every stage here is a pure function over the shared read-only
//! [`PixelBuffer`](crate::raster::PixelBuffer); the stages have no ordering
//! dependency on each other and never fail. The feature extractor is the one
//! exception to purity: its mount prominences are sampled from an injected
//! random source and are documented as decorative.

pub mod features;
pub mod orientation;
pub mod presence;
pub mod quality;
pub mod regions;

pub use features::{GeometryProxies, MountProminence};
pub use orientation::{OrientationAssessment, OrientationClass, OrientationOptions};
pub use presence::{PresenceAssessment, PresenceOptions};
pub use quality::{QualityAssessment, QualityClass};
pub use regions::{
    QualityLabel, RegionAssessment, RegionKey, RegionRect, RegionScanOptions, RegionTable,
};

use serde::Serialize;

/// Aggregate of every analysis facet plus the fused confidence score.
///
/// Created fresh per invocation and never mutated afterwards. All numeric
/// fields are deterministic for a given buffer; only the mount prominences
/// inside `geometry` depend on the injected random source.
#[derive(Clone, Debug, Serialize)]
pub struct VisionAnalysis {
    pub quality: QualityAssessment,
    pub presence: PresenceAssessment,
    pub orientation: OrientationAssessment,
    /// One assessment per region, in [`RegionKey::ALL`] order.
    pub regions: Vec<RegionAssessment>,
    pub geometry: GeometryProxies,
    /// Weighted fusion of the facets above, in [0, 1].
    pub confidence_score: f32,
}
