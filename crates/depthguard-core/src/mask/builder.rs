use crate::frame::{EdgeResponseMap, TrustMask};
use crate::pipeline::config::FilterConfig;

use super::morphology::{dilate, StructuringElement};
use super::threshold::{invert, threshold_edges};

/// Turn an edge response into a trust mask.
///
/// Pipeline: threshold `|response| > filter_threshold` -> dilate with the
/// configured structuring element -> invert, so that 1.0 means "trusted".
pub fn build_trust_mask(edges: &EdgeResponseMap, config: &FilterConfig) -> TrustMask {
    let on_edge = threshold_edges(edges, config.filter_threshold);
    let element = StructuringElement::new(config.struct_shape, config.dilate_struct_size as usize);
    let broadened = dilate(&on_edge, &element);
    invert(&broadened)
}
