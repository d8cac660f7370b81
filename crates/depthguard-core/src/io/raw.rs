use std::fmt;
use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use ndarray::Array2;

use crate::consts::DEPTH_U16_MAX;
use crate::error::{DepthGuardError, Result};
use crate::frame::{Frame, FrameMetadata};

/// Pixel encoding of a single-channel depth image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthEncoding {
    /// 8-bit unsigned ("mono8" / "8UC1").
    Mono8,
    /// 16-bit unsigned, typically millimetres ("mono16" / "16UC1").
    Mono16,
    /// 32-bit float ("32FC1").
    Float32,
}

impl DepthEncoding {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Mono8 => 1,
            Self::Mono16 => 2,
            Self::Float32 => 4,
        }
    }
}

impl fmt::Display for DepthEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mono8 => write!(f, "8UC1"),
            Self::Mono16 => write!(f, "16UC1"),
            Self::Float32 => write!(f, "32FC1"),
        }
    }
}

impl FromStr for DepthEncoding {
    type Err = DepthGuardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mono8" | "8UC1" => Ok(Self::Mono8),
            "mono16" | "16UC1" => Ok(Self::Mono16),
            "32FC1" => Ok(Self::Float32),
            other => Err(DepthGuardError::UnsupportedEncoding(other.to_string())),
        }
    }
}

/// An encoded depth image as delivered by a sensor driver.
#[derive(Clone, Debug, PartialEq)]
pub struct RawDepthImage {
    pub width: u32,
    pub height: u32,
    pub encoding: DepthEncoding,
    pub is_bigendian: bool,
    /// Row stride in bytes.
    pub step: usize,
    pub data: Vec<u8>,
    pub metadata: FrameMetadata,
}

impl RawDepthImage {
    /// Decode into a float depth frame. Values keep their sensor units.
    pub fn to_frame(&self) -> Result<Frame> {
        if self.width == 0 || self.height == 0 {
            return Err(DepthGuardError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let w = self.width as usize;
        let h = self.height as usize;
        let bpp = self.encoding.bytes_per_pixel();
        let packed_row = w * bpp;
        if self.step < packed_row {
            return Err(DepthGuardError::InvalidStep {
                step: self.step,
                min: packed_row,
            });
        }
        // The last row only needs its packed pixels, not the full stride.
        let expected = self
            .step
            .checked_mul(h - 1)
            .and_then(|n| n.checked_add(packed_row))
            .unwrap_or(usize::MAX);
        if self.data.len() < expected {
            return Err(DepthGuardError::BufferTooShort {
                expected,
                actual: self.data.len(),
            });
        }

        let mut data = Array2::<f32>::zeros((h, w));
        for (row, mut out) in data.rows_mut().into_iter().enumerate() {
            let start = row * self.step;
            let bytes = &self.data[start..start + packed_row];
            for (col, sample) in bytes.chunks_exact(bpp).enumerate() {
                out[col] = self.decode_sample(sample);
            }
        }

        Ok(Frame::with_metadata(data, self.metadata))
    }

    fn decode_sample(&self, sample: &[u8]) -> f32 {
        match (self.encoding, self.is_bigendian) {
            (DepthEncoding::Mono8, _) => sample[0] as f32,
            (DepthEncoding::Mono16, false) => LittleEndian::read_u16(sample) as f32,
            (DepthEncoding::Mono16, true) => BigEndian::read_u16(sample) as f32,
            (DepthEncoding::Float32, false) => LittleEndian::read_f32(sample),
            (DepthEncoding::Float32, true) => BigEndian::read_f32(sample),
        }
    }
}

/// A 16-bit unsigned depth image ("16UC1"), the published output encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepthImage16 {
    pub width: u32,
    pub height: u32,
    /// Row-major samples.
    pub data: Vec<u16>,
    pub metadata: FrameMetadata,
}

impl DepthImage16 {
    /// Convert a float frame, rounding to nearest and saturating to
    /// `[0, 65535]`. NaN becomes 0.
    pub fn from_frame(frame: &Frame) -> Self {
        let data = frame
            .data
            .iter()
            .map(|&v| {
                if v.is_nan() {
                    0
                } else {
                    v.round().clamp(0.0, DEPTH_U16_MAX) as u16
                }
            })
            .collect();
        Self {
            width: frame.width() as u32,
            height: frame.height() as u32,
            data,
            metadata: frame.metadata,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u16> {
        if row >= self.height as usize || col >= self.width as usize {
            return None;
        }
        self.data.get(row * self.width as usize + col).copied()
    }

    /// Re-encode as a little-endian "16UC1" raw image.
    pub fn into_raw(self) -> RawDepthImage {
        let mut bytes = vec![0u8; self.data.len() * 2];
        LittleEndian::write_u16_into(&self.data, &mut bytes);
        RawDepthImage {
            width: self.width,
            height: self.height,
            encoding: DepthEncoding::Mono16,
            is_bigendian: false,
            step: self.width as usize * 2,
            data: bytes,
            metadata: self.metadata,
        }
    }
}
