use ndarray::Array2;

use crate::consts::{DISCARDED, TRUSTED};

/// Binarize an edge response: 1.0 where `|response| > threshold`, else 0.0.
///
/// The comparison is strict, and a NaN response is never above the threshold.
pub fn threshold_edges(edges: &Array2<f32>, threshold: f32) -> Array2<f32> {
    edges.mapv(|v| if v.abs() > threshold { 1.0 } else { 0.0 })
}

/// Flip a binary mask (`1 ↔ 0`), turning "on an edge" into "discard".
pub fn invert(mask: &Array2<f32>) -> Array2<f32> {
    mask.mapv(|v| if v == TRUSTED { DISCARDED } else { TRUSTED })
}
