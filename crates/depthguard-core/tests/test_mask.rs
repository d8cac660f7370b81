mod common;

use ndarray::{array, Array2};

use depthguard_core::edge::laplacian;
use depthguard_core::mask::{build_trust_mask, dilate, invert, threshold_edges, StructuringElement};
use depthguard_core::pipeline::{FilterConfig, StructShape};

use common::{discarded_positions, make_frame, spike_config, spike_frame, step_frame};

fn on_positions(mask: &Array2<f32>) -> Vec<(usize, usize)> {
    mask.indexed_iter()
        .filter(|&(_, &v)| v == 1.0)
        .map(|(pos, _)| pos)
        .collect()
}

fn single_pixel(h: usize, w: usize, r: usize, c: usize) -> Array2<f32> {
    let mut mask = Array2::zeros((h, w));
    mask[[r, c]] = 1.0;
    mask
}

// ---------------------------------------------------------------------------
// threshold_edges
// ---------------------------------------------------------------------------

#[test]
fn test_threshold_is_strict() {
    let edges = array![[10.0f32, 10.001, 9.999]];
    let bin = threshold_edges(&edges, 10.0);
    assert_eq!(bin, array![[0.0f32, 1.0, 0.0]]);
}

#[test]
fn test_threshold_uses_absolute_response() {
    let edges = array![[-50.0f32, 50.0, -5.0, 0.0]];
    let bin = threshold_edges(&edges, 20.0);
    assert_eq!(bin, array![[1.0f32, 1.0, 0.0, 0.0]]);
}

#[test]
fn test_threshold_nan_is_not_an_edge() {
    let edges = array![[f32::NAN, 1e9]];
    let bin = threshold_edges(&edges, 1.0);
    assert_eq!(bin, array![[0.0f32, 1.0]]);
}

#[test]
fn test_invert() {
    let mask = array![[0.0f32, 1.0], [1.0, 0.0]];
    assert_eq!(invert(&mask), array![[1.0f32, 0.0], [0.0, 1.0]]);
    assert_eq!(invert(&invert(&mask)), mask);
}

// ---------------------------------------------------------------------------
// dilate
// ---------------------------------------------------------------------------

#[test]
fn test_dilate_rectangle_grows_square() {
    let mask = single_pixel(5, 5, 2, 2);
    let el = StructuringElement::new(StructShape::Rectangle, 3);
    let grown = dilate(&mask, &el);
    let on = on_positions(&grown);
    assert_eq!(on.len(), 9);
    assert!(on.iter().all(|&(r, c)| (1..=3).contains(&r) && (1..=3).contains(&c)));
}

#[test]
fn test_dilate_cross_grows_plus() {
    let mask = single_pixel(5, 5, 2, 2);
    let el = StructuringElement::new(StructShape::Cross, 3);
    let grown = dilate(&mask, &el);
    assert_eq!(
        on_positions(&grown),
        vec![(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]
    );
}

#[test]
fn test_dilate_ellipse_5_from_center() {
    let mask = single_pixel(7, 7, 3, 3);
    let el = StructuringElement::new(StructShape::Ellipse, 5);
    let grown = dilate(&mask, &el);
    // The size-5 ellipse keeps only the center column of its outer rows.
    assert_eq!(on_positions(&grown).len(), 17);
    assert_eq!(grown[[1, 3]], 1.0);
    assert_eq!(grown[[1, 2]], 0.0);
    assert_eq!(grown[[2, 1]], 1.0);
}

#[test]
fn test_dilate_ignores_out_of_frame_taps() {
    let mask = single_pixel(4, 4, 0, 0);
    let el = StructuringElement::new(StructShape::Rectangle, 3);
    let grown = dilate(&mask, &el);
    assert_eq!(on_positions(&grown), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_dilate_even_size_anchor() {
    // Anchor of a 2x2 element sits at (1, 1): taps cover offsets -1..=0.
    let mask = single_pixel(5, 5, 2, 2);
    let el = StructuringElement::new(StructShape::Rectangle, 2);
    let grown = dilate(&mask, &el);
    assert_eq!(on_positions(&grown), vec![(2, 2), (2, 3), (3, 2), (3, 3)]);
}

#[test]
fn test_dilate_size_one_is_identity() {
    let mask = array![[0.0f32, 1.0, 0.0], [1.0, 0.0, 0.0]];
    let el = StructuringElement::new(StructShape::Ellipse, 1);
    assert_eq!(dilate(&mask, &el), mask);
}

#[test]
fn test_dilate_large_mask_parallel_path() {
    let mask = single_pixel(300, 300, 150, 150);
    let el = StructuringElement::new(StructShape::Rectangle, 5);
    let grown = dilate(&mask, &el);
    assert_eq!(on_positions(&grown).len(), 25);
    assert_eq!(grown[[148, 148]], 1.0);
    assert_eq!(grown[[152, 152]], 1.0);
    assert_eq!(grown[[147, 150]], 0.0);
}

// ---------------------------------------------------------------------------
// build_trust_mask: spike scenario
// ---------------------------------------------------------------------------

#[test]
fn test_spike_flagged_before_dilation() {
    let frame = spike_frame(5);
    let edges = laplacian(&frame.data, 3);
    let raw = threshold_edges(&edges, 100.0);
    assert_eq!(
        on_positions(&raw),
        vec![(1, 1), (1, 3), (2, 2), (3, 1), (3, 3)]
    );
}

#[test]
fn test_spike_region_grows_after_dilation() {
    let frame = spike_frame(5);
    let config = spike_config();
    let edges = laplacian(&frame.data, 3);
    let raw_count = on_positions(&threshold_edges(&edges, config.filter_threshold)).len();

    let mask = build_trust_mask(&edges, &config);
    let untrusted = discarded_positions(&mask).len();
    assert!(untrusted > raw_count);
    // On a 5x5 frame the dilated region covers everything.
    assert_eq!(untrusted, 25);
}

#[test]
fn test_spike_dilated_region_on_larger_frame() {
    let frame = spike_frame(7);
    let edges = laplacian(&frame.data, 3);
    let mask = build_trust_mask(&edges, &spike_config());

    let untrusted = discarded_positions(&mask);
    assert_eq!(untrusted.len(), 25);
    assert!(untrusted
        .iter()
        .all(|&(r, c)| (1..=5).contains(&r) && (1..=5).contains(&c)));
    // Outer ring stays trusted.
    for i in 0..7 {
        assert_eq!(mask[[0, i]], 1.0);
        assert_eq!(mask[[6, i]], 1.0);
        assert_eq!(mask[[i, 0]], 1.0);
        assert_eq!(mask[[i, 6]], 1.0);
    }
}

#[test]
fn test_flat_frame_is_fully_trusted() {
    let frame = make_frame(8, 8, 900.0);
    let edges = laplacian(&frame.data, 3);
    let mask = build_trust_mask(&edges, &FilterConfig::default());
    assert!(mask.iter().all(|&v| v == 1.0));
}

#[test]
fn test_step_edge_discards_band() {
    let frame = step_frame(6, 10, 1000.0, 2000.0);
    let config = FilterConfig {
        dilate_struct_size: 1,
        ..FilterConfig::default()
    };
    let edges = laplacian(&frame.data, 3);
    let mask = build_trust_mask(&edges, &config);
    // Columns 4 and 5 straddle the step; the far plane stays trusted.
    for r in 0..6 {
        assert_eq!(mask[[r, 4]], 0.0);
        assert_eq!(mask[[r, 5]], 0.0);
        assert_eq!(mask[[r, 0]], 1.0);
        assert_eq!(mask[[r, 9]], 1.0);
    }
}

#[test]
fn test_mask_is_binary() {
    let frame = step_frame(9, 13, 10.0, 4000.0);
    for shape in [StructShape::Rectangle, StructShape::Cross, StructShape::Ellipse] {
        let config = FilterConfig {
            struct_shape: shape,
            dilate_struct_size: 4,
            ..FilterConfig::default()
        };
        let mask = build_trust_mask(&laplacian(&frame.data, 5), &config);
        assert!(mask.iter().all(|&v| v == 0.0 || v == 1.0));
    }
}
