//! Point-cloud scene arrays for the cluster visualization backend.
//!
//! The rendering backend receives flat arrays of positions, RGBA colors,
//! and sizes, one tuple per cluster, and owns all drawing. This module's
//! only obligation is producing those arrays correctly from cluster
//! confidence, position, and support.

use crate::color::confidence_color;
use patchline_core::model::Patch;
use serde::Serialize;

/// Clusters without an authored position are placed on a circle of this
/// radius, inside the backend's `[-1.1, 1.1]` plot range.
const RING_RADIUS: f64 = 0.75;

/// Point size range; support counts scale linearly into it.
const MIN_SIZE: f32 = 12.0;
const MAX_SIZE: f32 = 36.0;
const SUPPORT_CEILING: f32 = 10.0;

/// Flat vertex arrays, one tuple per cluster.
///
/// `positions` holds 3 components per cluster (z is always 0), `colors` 4,
/// `sizes` 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterScene {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub sizes: Vec<f32>,
}

impl ClusterScene {
    /// Number of clusters represented.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.sizes.len()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn ring_position(index: usize, total: usize) -> [f32; 2] {
    #[allow(clippy::cast_precision_loss)]
    let angle = std::f64::consts::TAU * (index as f64) / (total.max(1) as f64);
    [
        (RING_RADIUS * angle.cos()) as f32,
        (RING_RADIUS * angle.sin()) as f32,
    ]
}

fn size_for_support(support: Option<u32>) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let weight = support.map_or(0.5, |s| (s as f32 / SUPPORT_CEILING).clamp(0.0, 1.0));
    MIN_SIZE + (MAX_SIZE - MIN_SIZE) * weight
}

/// Build the scene arrays for one patch's clusters.
///
/// Authored positions are used as-is; clusters without one fall back to a
/// deterministic ring layout by index. Color comes from the cluster's own
/// confidence when authored, otherwise the patch confidence. The output
/// always satisfies `positions.len() == 3n`, `colors.len() == 4n`,
/// `sizes.len() == n`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn cluster_scene(patch: &Patch) -> ClusterScene {
    let total = patch.clusters.len();
    let mut positions = Vec::with_capacity(total * 3);
    let mut colors = Vec::with_capacity(total * 4);
    let mut sizes = Vec::with_capacity(total);

    for (index, cluster) in patch.clusters.iter().enumerate() {
        let [x, y] = cluster.position.map_or_else(
            || ring_position(index, total),
            |[x, y]| [x as f32, y as f32],
        );
        positions.extend_from_slice(&[x, y, 0.0]);

        let confidence = cluster.confidence.unwrap_or(patch.confidence);
        colors.extend_from_slice(&confidence_color(confidence).components());

        sizes.push(size_for_support(cluster.support));
    }

    ClusterScene {
        positions,
        colors,
        sizes,
    }
}
