//! Similarity rescue: restore discarded pixels whose depth agrees with
//! enough of their 3×3 neighborhood.

use ndarray::{Array2, ArrayView1};

use crate::consts::{DISCARDED, NEIGHBOR_COUNT, TRUSTED};
use crate::frame::TrustMask;
use crate::pipeline::config::FilterConfig;

/// Thresholds for the rescue decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RescueParams {
    /// A neighbor is similar when `|neighbor - center| < distance_threshold`.
    pub distance_threshold: f32,
    /// A pixel is rescued when its similar-neighbor count is strictly greater.
    pub similar_count_threshold: u32,
}

impl From<&FilterConfig> for RescueParams {
    fn from(config: &FilterConfig) -> Self {
        Self {
            distance_threshold: config.distance_threshold,
            similar_count_threshold: config.similar_count_threshold,
        }
    }
}

/// Flip discarded interior pixels of `mask` back to trusted when more than
/// `similar_count_threshold` of their 8 neighbors in `frame` lie within
/// `distance_threshold` of the center value.
///
/// `mask` is mutated in place. The outermost ring of pixels is never
/// examined. Every decision reads only `frame` and the pixel's own pre-rescue
/// mask value, so the result does not depend on traversal order.
///
/// Returns the number of rescued pixels.
///
/// # Panics
///
/// Panics if `frame` and `mask` differ in shape.
pub fn rescue_similar(frame: &Array2<f32>, mask: &mut TrustMask, params: &RescueParams) -> usize {
    assert_eq!(
        frame.dim(),
        mask.dim(),
        "trust mask must match the frame dimensions"
    );
    let (h, w) = frame.dim();
    if h < 3 || w < 3 {
        return 0;
    }

    let mut rescued = 0;
    for row in 1..h - 1 {
        let above = frame.row(row - 1);
        let here = frame.row(row);
        let below = frame.row(row + 1);
        let mut mask_row = mask.row_mut(row);

        for col in 1..w - 1 {
            if mask_row[col] != DISCARDED {
                continue;
            }
            let similar = similar_neighbors(&above, &here, &below, col, params.distance_threshold);
            if similar > params.similar_count_threshold {
                mask_row[col] = TRUSTED;
                rescued += 1;
            }
        }
    }
    rescued
}

/// Count the 8 neighbors of `here[col]` whose distance to it is below `max_distance`.
#[inline]
fn similar_neighbors(
    above: &ArrayView1<f32>,
    here: &ArrayView1<f32>,
    below: &ArrayView1<f32>,
    col: usize,
    max_distance: f32,
) -> u32 {
    let center = here[col];
    let neighbors: [f32; NEIGHBOR_COUNT as usize] = [
        above[col - 1],
        above[col],
        above[col + 1],
        here[col - 1],
        here[col + 1],
        below[col - 1],
        below[col],
        below[col + 1],
    ];
    neighbors
        .iter()
        .filter(|&&n| (n - center).abs() < max_distance)
        .count() as u32
}
