use std::time::Instant;

use ndarray::{Array2, Zip};
use tracing::{debug, warn};

use crate::consts::{DISCARDED, TRUSTED};
use crate::edge::detect_edges;
use crate::frame::{Frame, TrustMask};
use crate::mask::build_trust_mask;
use crate::rescue::{rescue_similar, RescueParams};

use super::config::FilterConfig;
use super::types::{FilterOutput, FilterStats};

/// Run one depth frame through the edge filter.
///
/// Pipeline: Laplacian edge response -> threshold, dilate, invert ->
/// similarity rescue (in place on the mask) -> mask the input frame.
///
/// With `config.enabled == false` the frame is returned unchanged and no
/// mask is produced. An even `laplace_kernel_size` that reaches this point
/// falls back to the default aperture.
pub fn filter_frame(frame: &Frame, config: &FilterConfig) -> FilterOutput {
    if !config.enabled {
        return FilterOutput::Passthrough(frame.clone());
    }

    let start = Instant::now();
    let ksize = if FilterConfig::is_valid_kernel_size(config.laplace_kernel_size) {
        config.laplace_kernel_size
    } else {
        let fallback = FilterConfig::default().laplace_kernel_size;
        warn!(
            requested = config.laplace_kernel_size,
            fallback, "Even Laplacian kernel size, using default"
        );
        fallback
    };

    let edges = detect_edges(frame, ksize);
    let mut mask = build_trust_mask(&edges, config);
    let discarded_by_edges = count_discarded(&mask);

    let rescued = if config.similarity_enabled {
        rescue_similar(&frame.data, &mut mask, &RescueParams::from(config))
    } else {
        0
    };

    let data = apply_mask(&frame.data, &mask);
    let stats = FilterStats {
        total: mask.len(),
        discarded_by_edges,
        rescued,
        discarded: discarded_by_edges - rescued,
    };

    debug!(
        rows = frame.height(),
        cols = frame.width(),
        discarded = stats.discarded,
        rescued = stats.rescued,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Filtered depth frame"
    );

    FilterOutput::Filtered {
        frame: Frame::with_metadata(data, frame.metadata),
        mask,
        stats,
    }
}

/// Keep samples where the mask is trusted and zero the rest.
///
/// Equivalent to the pointwise product `data * mask` for finite depth, but
/// a discarded NaN or infinite sample still comes out as exactly 0.0.
pub fn apply_mask(data: &Array2<f32>, mask: &TrustMask) -> Array2<f32> {
    Zip::from(data)
        .and(mask)
        .map_collect(|&v, &m| if m == TRUSTED { v } else { 0.0 })
}

/// Number of discarded pixels in a trust mask.
pub fn count_discarded(mask: &TrustMask) -> usize {
    mask.iter().filter(|&&m| m == DISCARDED).count()
}
