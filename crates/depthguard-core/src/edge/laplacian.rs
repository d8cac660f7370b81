use ndarray::parallel::prelude::*;
use ndarray::{Array2, ArrayViewMut1, Axis};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::frame::{EdgeResponseMap, Frame};

use super::border::reflect_101;

/// Compute the Laplacian edge response of a depth frame.
pub fn detect_edges(frame: &Frame, ksize: u32) -> EdgeResponseMap {
    laplacian(&frame.data, ksize)
}

/// Discrete Laplacian `d²/dx² + d²/dy²` of `data` with a `ksize × ksize`
/// aperture. `ksize` must be odd.
///
/// `ksize == 1` uses the 4-neighbour kernel:
///   0  1  0
///   1 -4  1
///   0  1  0
/// Larger apertures sum two separable second-derivative passes whose
/// smoothing factor is the binomial row of length `ksize`. For `ksize == 3`
/// that works out to:
///   2  0  2
///   0 -8  0
///   2  0  2
///
/// Samples outside the frame come from reflect-101 extrapolation, so a
/// constant frame yields zero response everywhere, including the border.
pub fn laplacian(data: &Array2<f32>, ksize: u32) -> EdgeResponseMap {
    debug_assert!(ksize % 2 == 1, "Laplacian aperture must be odd, got {ksize}");
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return Array2::zeros((h, w));
    }

    let (deriv, smooth) = laplacian_kernels(ksize as usize);

    let (d2x, mut response) = rayon::join(
        || convolve_cols(&convolve_rows(data, &deriv), &smooth),
        || convolve_cols(&convolve_rows(data, &smooth), &deriv),
    );
    response += &d2x;
    response
}

/// Second-derivative and smoothing factors for a separable Laplacian.
fn laplacian_kernels(ksize: usize) -> (Vec<f32>, Vec<f32>) {
    let second_diff = [1.0f32, -2.0, 1.0];
    if ksize <= 1 {
        return (second_diff.to_vec(), vec![0.0, 1.0, 0.0]);
    }
    let deriv = convolve_1d(&second_diff, &binomial_row(ksize - 2));
    let smooth = binomial_row(ksize);
    (deriv, smooth)
}

/// Row `len - 1` of Pascal's triangle.
fn binomial_row(len: usize) -> Vec<f32> {
    let mut row = vec![1.0f32];
    for _ in 1..len {
        let mut next = vec![1.0f32; row.len() + 1];
        for i in 1..row.len() {
            next[i] = row[i - 1] + row[i];
        }
        row = next;
    }
    row
}

/// Full 1D convolution of two kernels.
fn convolve_1d(a: &[f32], b: &[f32]) -> Vec<f32> {
    let mut out = vec![0.0f32; a.len() + b.len() - 1];
    for (i, &av) in a.iter().enumerate() {
        for (j, &bv) in b.iter().enumerate() {
            out[i + j] += av * bv;
        }
    }
    out
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = (kernel.len() / 2) as isize;

    let fill_row = |row: usize, mut out: ArrayViewMut1<f32>| {
        for col in 0..w {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_col = reflect_101(col as isize + ki as isize - radius, w);
                sum += data[[row, src_col]] * kv;
            }
            out[col] = sum;
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

fn convolve_cols(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = (kernel.len() / 2) as isize;

    let fill_row = |row: usize, mut out: ArrayViewMut1<f32>| {
        for col in 0..w {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_row = reflect_101(row as isize + ki as isize - radius, h);
                sum += data[[src_row, col]] * kv;
            }
            out[col] = sum;
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
