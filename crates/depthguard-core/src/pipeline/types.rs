use crate::frame::{Frame, TrustMask};

/// Pixel accounting for one filtered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Number of pixels in the frame.
    pub total: usize,
    /// Pixels marked untrusted by the edge mask, before rescue.
    pub discarded_by_edges: usize,
    /// Pixels restored by the similarity rescue pass.
    pub rescued: usize,
    /// Pixels zeroed in the output.
    pub discarded: usize,
}

impl FilterStats {
    pub fn kept(&self) -> usize {
        self.total - self.discarded
    }

    /// Fraction of pixels zeroed in the output, 0.0 for an empty frame.
    pub fn discarded_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.discarded as f64 / self.total as f64
        }
    }
}

/// Result of running one frame through the filter.
#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum FilterOutput {
    /// Filtering disabled: the input frame, unchanged. No debug mask.
    Passthrough(Frame),
    /// Filtered frame, the final trust mask (debug artifact) and pixel stats.
    Filtered {
        frame: Frame,
        mask: TrustMask,
        stats: FilterStats,
    },
}

impl FilterOutput {
    pub fn frame(&self) -> &Frame {
        match self {
            Self::Passthrough(frame) | Self::Filtered { frame, .. } => frame,
        }
    }

    pub fn into_frame(self) -> Frame {
        match self {
            Self::Passthrough(frame) | Self::Filtered { frame, .. } => frame,
        }
    }

    pub fn mask(&self) -> Option<&TrustMask> {
        match self {
            Self::Passthrough(_) => None,
            Self::Filtered { mask, .. } => Some(mask),
        }
    }

    pub fn stats(&self) -> Option<&FilterStats> {
        match self {
            Self::Passthrough(_) => None,
            Self::Filtered { stats, .. } => Some(stats),
        }
    }

    pub fn is_passthrough(&self) -> bool {
        matches!(self, Self::Passthrough(_))
    }
}
