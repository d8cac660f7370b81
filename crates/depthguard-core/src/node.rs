//! Frame-processing node: the boundary between a depth image stream and the
//! pure filter core.

use tracing::error;

use crate::error::Result;
use crate::frame::{Frame, TrustMask};
use crate::io::raw::{DepthImage16, RawDepthImage};
use crate::pipeline::{filter_frame, FilterOutput, FilterStats, SharedConfig};

/// What the node publishes for one input image.
#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Published {
    /// Filtering disabled: the input image, republished unchanged.
    Passthrough(RawDepthImage),
    /// Filtered depth plus the float trust mask for diagnostics.
    Filtered {
        depth: DepthImage16,
        debug_mask: Frame,
        stats: FilterStats,
    },
}

/// Applies the depth filter to incoming images using a live-reloadable
/// configuration.
///
/// Each call takes one configuration snapshot and uses it for the whole
/// frame. Frames are independent; callers deliver them one at a time.
#[derive(Clone, Debug, Default)]
pub struct DepthFilterNode {
    config: SharedConfig,
}

impl DepthFilterNode {
    pub fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    /// Handle for delivering configuration updates.
    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// Process one encoded depth image.
    ///
    /// A decoding failure drops the frame: the error is logged and returned,
    /// and nothing is published.
    pub fn process(&self, raw: &RawDepthImage) -> Result<Published> {
        let config = self.config.snapshot();
        if !config.enabled {
            return Ok(Published::Passthrough(raw.clone()));
        }

        let frame = raw.to_frame().inspect_err(|e| {
            error!(
                sequence = raw.metadata.sequence,
                encoding = %raw.encoding,
                "Dropping depth frame: {e}"
            );
        })?;

        match filter_frame(&frame, &config) {
            FilterOutput::Filtered { frame, mask, stats } => Ok(Published::Filtered {
                depth: DepthImage16::from_frame(&frame),
                debug_mask: mask_frame(mask, &frame),
                stats,
            }),
            FilterOutput::Passthrough(_) => Ok(Published::Passthrough(raw.clone())),
        }
    }

    /// Process an already-decoded frame with the current configuration.
    pub fn process_frame(&self, frame: &Frame) -> FilterOutput {
        let config = self.config.snapshot();
        filter_frame(frame, &config)
    }
}

fn mask_frame(mask: TrustMask, source: &Frame) -> Frame {
    Frame::with_metadata(mask, source.metadata)
}
