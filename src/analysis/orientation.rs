//! Dominant-orientation classification from gradient edge counts.
//!
//! Counts interior pixels whose vertical (below-neighbour) or horizontal
//! (right-neighbour) luma difference exceeds a fixed threshold, then compares
//! the two counts. A hand held upright produces mostly horizontal structure
//! change along the vertical axis, so a clear vertical majority reads as
//! `Correct`, the inverse as `Rotated`, anything else as `Unclear`.

use crate::raster::PixelBuffer;
use serde::{Deserialize, Serialize};

/// Orientation verdict for the frame content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationClass {
    Correct,
    Rotated,
    Unclear,
}

/// Thresholds for the edge-count comparison.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationOptions {
    /// Minimum luma difference for a neighbour step to count as an edge.
    pub edge_threshold: f32,
    /// One count must exceed the other by this factor to dominate.
    pub dominance_margin: f32,
}

impl Default for OrientationOptions {
    fn default() -> Self {
        Self {
            edge_threshold: 20.0,
            dominance_margin: 1.2,
        }
    }
}

/// Edge counts plus the class they map to.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct OrientationAssessment {
    pub class: OrientationClass,
    /// Interior pixels whose below-neighbour luma step exceeds the threshold.
    pub vertical_edges: usize,
    /// Interior pixels whose right-neighbour luma step exceeds the threshold.
    pub horizontal_edges: usize,
}

/// Count directional edges over the interior and classify the dominant axis.
pub fn classify(buffer: &PixelBuffer, opts: &OrientationOptions) -> OrientationAssessment {
    let (w, h) = (buffer.width(), buffer.height());
    let mut vertical_edges = 0usize;
    let mut horizontal_edges = 0usize;

    if w >= 2 && h >= 2 {
        for y in 0..h - 1 {
            for x in 0..w - 1 {
                let l = buffer.luma(x, y);
                if (l - buffer.luma(x, y + 1)).abs() > opts.edge_threshold {
                    vertical_edges += 1;
                }
                if (l - buffer.luma(x + 1, y)).abs() > opts.edge_threshold {
                    horizontal_edges += 1;
                }
            }
        }
    }

    let class = if vertical_edges as f32 > opts.dominance_margin * horizontal_edges as f32 {
        OrientationClass::Correct
    } else if horizontal_edges as f32 > opts.dominance_margin * vertical_edges as f32 {
        OrientationClass::Rotated
    } else {
        OrientationClass::Unclear
    };

    OrientationAssessment {
        class,
        vertical_edges,
        horizontal_edges,
    }
}
