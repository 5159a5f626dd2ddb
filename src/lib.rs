#![doc = include_str!("../README.md")]

pub mod analysis;
pub mod config;
pub mod error;
pub mod narrative;
pub mod raster;
pub mod reader;
pub mod reading;
pub mod scoring;

// --- High-level re-exports -------------------------------------------------

// Main entry points: reader + report.
pub use crate::error::ReadingError;
pub use crate::reader::{PalmReader, ReaderParams};
pub use crate::reading::{Reading, RegionNarrative};

// Analysis facets useful to consumers of the report.
pub use crate::analysis::{
    OrientationClass, QualityClass, QualityLabel, RegionKey, VisionAnalysis,
};
pub use crate::scoring::AnalysisMethod;

/// Small prelude for quick experiments.
///
/// ```no_run
/// use palm_reader::prelude::*;
///
/// # fn main() {
/// let reader = PalmReader::new(ReaderParams::default());
/// let reading = reader.process(b"not an image");
/// assert!(reading.is_err());
/// # }
/// ```
pub mod prelude {
    pub use crate::analysis::VisionAnalysis;
    pub use crate::{PalmReader, Reading, ReaderParams, ReadingError};
}
