use ndarray::Array2;

/// A single-channel depth frame.
/// Samples are f32 in raw sensor depth units (no normalization).
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Depth samples, row-major, shape = (rows, cols)
    pub data: Array2<f32>,
    /// Per-frame metadata carried from input to output
    pub metadata: FrameMetadata,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self {
            data,
            metadata: FrameMetadata::default(),
        }
    }

    pub fn with_metadata(data: Array2<f32>, metadata: FrameMetadata) -> Self {
        Self { data, metadata }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Header-like metadata, copied verbatim onto every frame derived from an input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameMetadata {
    pub sequence: u64,
    pub timestamp_us: Option<u64>,
}

/// Per-pixel binary trust decision: 1.0 = keep, 0.0 = discard.
pub type TrustMask = Array2<f32>;

/// Per-pixel discontinuity strength, same shape as the source frame.
pub type EdgeResponseMap = Array2<f32>;
