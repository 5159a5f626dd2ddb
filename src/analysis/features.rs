//! Coarse geometric proxies and mount prominences.
//!
//! These values are descriptive only. The bounding proxies come from the
//! buffer dimensions alone, and the per-mount prominences are sampled from
//! the caller-supplied random source rather than derived from pixel content.
//! Nothing downstream scores against them; they exist to give the narrative
//! layer something concrete to talk about.

use rand::Rng;
use serde::Serialize;

/// Decorative prominence value for one named mount.
#[derive(Clone, Debug, Serialize)]
pub struct MountProminence {
    pub name: String,
    /// Sampled uniformly from [0.2, 1.0]; not derived from pixels.
    pub prominence: f32,
}

/// Bounding proxies plus the sampled mount prominences.
#[derive(Clone, Debug, Serialize)]
pub struct GeometryProxies {
    /// ≈ 0.6 × buffer width.
    pub palm_width: f32,
    /// ≈ 0.8 × buffer height.
    pub palm_height: f32,
    /// ≈ 0.4 × buffer height.
    pub finger_length: f32,
    pub mounts: Vec<MountProminence>,
}

/// Derive the proxies from buffer dimensions and sample one prominence per
/// configured mount name.
pub fn extract<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    mount_names: &[String],
    rng: &mut R,
) -> GeometryProxies {
    GeometryProxies {
        palm_width: (0.6 * width as f64) as f32,
        palm_height: (0.8 * height as f64) as f32,
        finger_length: (0.4 * height as f64) as f32,
        mounts: mount_names
            .iter()
            .map(|name| MountProminence {
                name: name.clone(),
                prominence: rng.gen_range(0.2..=1.0),
            })
            .collect(),
    }
}
