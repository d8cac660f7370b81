use ndarray::parallel::prelude::*;
use ndarray::{Array2, ArrayViewMut1, Axis};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::pipeline::config::StructShape;

/// A flat (unweighted) square structuring element.
///
/// The anchor sits at `(size / 2, size / 2)`, so even sizes extend one
/// pixel further towards the bottom-right than towards the top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuringElement {
    taps: Array2<bool>,
    anchor: usize,
}

impl StructuringElement {
    /// Build a `size × size` element of the given shape. A size of 0 is
    /// treated as 1 (a single-pixel element, i.e. identity dilation).
    pub fn new(shape: StructShape, size: usize) -> Self {
        let size = size.max(1);
        let anchor = size / 2;
        let mut taps = Array2::from_elem((size, size), false);

        match shape {
            StructShape::Rectangle => taps.fill(true),
            StructShape::Cross => {
                taps.row_mut(anchor).fill(true);
                taps.column_mut(anchor).fill(true);
            }
            StructShape::Ellipse => {
                let r = (size / 2) as f64;
                let c = (size / 2) as f64;
                let inv_r2 = if r > 0.0 { 1.0 / (r * r) } else { 0.0 };
                for row in 0..size {
                    let dy = row as f64 - r;
                    if dy.abs() > r {
                        continue;
                    }
                    let dx = (c * ((r * r - dy * dy) * inv_r2).sqrt()).round();
                    let start = (c - dx).max(0.0) as usize;
                    let end = ((c + dx + 1.0) as usize).min(size);
                    for col in start..end {
                        taps[[row, col]] = true;
                    }
                }
            }
        }

        Self { taps, anchor }
    }

    pub fn size(&self) -> usize {
        self.taps.nrows()
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.taps.get((row, col)).copied().unwrap_or(false)
    }

    /// Offsets `(d_row, d_col)` of every active tap relative to the anchor.
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let anchor = self.anchor as isize;
        self.taps
            .indexed_iter()
            .filter(|&(_, &on)| on)
            .map(|((row, col), _)| (row as isize - anchor, col as isize - anchor))
            .collect()
    }
}

/// Flat binary dilation: a pixel turns on if any active tap of `element`
/// centered on it covers an "on" pixel.
///
/// Taps that fall outside the mask are ignored, so the border never
/// contributes "on" pixels of its own.
pub fn dilate(mask: &Array2<f32>, element: &StructuringElement) -> Array2<f32> {
    let (h, w) = mask.dim();
    let offsets = element.offsets();

    let fill_row = |row: usize, mut out: ArrayViewMut1<f32>| {
        for col in 0..w {
            let hit = offsets.iter().any(|&(dr, dc)| {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                nr >= 0
                    && nr < h as isize
                    && nc >= 0
                    && nc < w as isize
                    && mask[[nr as usize, nc as usize]] == 1.0
            });
            out[col] = if hit { 1.0 } else { 0.0 };
        }
    };

    let mut result = Array2::<f32>::zeros((h, w));
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, out)| fill_row(row, out));
    } else {
        for (row, out) in result.axis_iter_mut(Axis(0)).enumerate() {
            fill_row(row, out);
        }
    }
    result
}
