#![allow(dead_code)]

use ndarray::Array2;

use depthguard_core::frame::Frame;
use depthguard_core::pipeline::{FilterConfig, StructShape};

/// Constant `fill` frame of shape `(h, w)`.
pub fn make_frame(h: usize, w: usize, fill: f32) -> Frame {
    Frame::new(Array2::from_elem((h, w), fill))
}

/// Constant 100.0 frame with a single 500.0 spike at `(center, center)`.
pub fn spike_frame(size: usize) -> Frame {
    let center = size / 2;
    let mut data = Array2::from_elem((size, size), 100.0f32);
    data[[center, center]] = 500.0;
    Frame::new(data)
}

/// Deterministic integer-valued texture, useful for property checks.
pub fn textured_frame(h: usize, w: usize) -> Frame {
    Frame::new(Array2::from_shape_fn((h, w), |(r, c)| {
        (((r * 7 + c * 13) % 17) * 10 + (r / 3) * 40) as f32
    }))
}

/// Two flat planes at different depths split by a vertical step edge.
pub fn step_frame(h: usize, w: usize, near: f32, far: f32) -> Frame {
    Frame::new(Array2::from_shape_fn((h, w), |(_, c)| {
        if c < w / 2 {
            near
        } else {
            far
        }
    }))
}

/// Config for the spike scenario: 3x3 Laplacian, low threshold, 3x3 rectangle.
pub fn spike_config() -> FilterConfig {
    FilterConfig {
        enabled: true,
        laplace_kernel_size: 3,
        filter_threshold: 100.0,
        struct_shape: StructShape::Rectangle,
        dilate_struct_size: 3,
        similarity_enabled: false,
        distance_threshold: 0.0,
        similar_count_threshold: 8,
    }
}

/// Positions whose mask value is 0.0.
pub fn discarded_positions(mask: &Array2<f32>) -> Vec<(usize, usize)> {
    mask.indexed_iter()
        .filter(|&(_, &v)| v == 0.0)
        .map(|(pos, _)| pos)
        .collect()
}

/// True if every pixel on the outermost ring matches in both masks.
pub fn borders_equal(a: &Array2<f32>, b: &Array2<f32>) -> bool {
    let (h, w) = a.dim();
    a.indexed_iter()
        .filter(|((r, c), _)| *r == 0 || *c == 0 || *r == h - 1 || *c == w - 1)
        .all(|(pos, &v)| b[pos] == v)
}
