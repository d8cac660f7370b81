use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DILATE_STRUCT_SIZE, DEFAULT_DISTANCE_THRESHOLD, DEFAULT_FILTER_THRESHOLD,
    DEFAULT_LAPLACE_KERNEL_SIZE, DEFAULT_SIMILAR_COUNT_THRESHOLD,
};

/// Shape of the structuring element used to broaden edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructShape {
    #[default]
    Rectangle,
    Cross,
    Ellipse,
}

impl fmt::Display for StructShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "Rectangle"),
            Self::Cross => write!(f, "Cross"),
            Self::Ellipse => write!(f, "Ellipse"),
        }
    }
}

/// Parameters for one filtering run. Every field can be changed at runtime;
/// a frame always uses a single snapshot from start to finish.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// When false, frames pass through untouched.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Laplacian aperture size. Must be odd; even values are rejected.
    #[serde(default = "default_laplace_kernel_size")]
    pub laplace_kernel_size: u32,
    /// Absolute edge response above which a pixel is considered "on an edge".
    #[serde(default = "default_filter_threshold")]
    pub filter_threshold: f32,
    /// Structuring element shape used for dilation.
    #[serde(default)]
    pub struct_shape: StructShape,
    /// Side length of the structuring element.
    #[serde(default = "default_dilate_struct_size")]
    pub dilate_struct_size: u32,
    /// Enable the neighborhood similarity rescue pass.
    #[serde(default = "default_enabled")]
    pub similarity_enabled: bool,
    /// Maximum depth difference (exclusive) for a neighbor to count as similar.
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f32,
    /// Similar-neighbor count (0-8) that must be exceeded to rescue a pixel.
    #[serde(default = "default_similar_count_threshold")]
    pub similar_count_threshold: u32,
}

fn default_enabled() -> bool {
    true
}
fn default_laplace_kernel_size() -> u32 {
    DEFAULT_LAPLACE_KERNEL_SIZE
}
fn default_filter_threshold() -> f32 {
    DEFAULT_FILTER_THRESHOLD
}
fn default_dilate_struct_size() -> u32 {
    DEFAULT_DILATE_STRUCT_SIZE
}
fn default_distance_threshold() -> f32 {
    DEFAULT_DISTANCE_THRESHOLD
}
fn default_similar_count_threshold() -> u32 {
    DEFAULT_SIMILAR_COUNT_THRESHOLD
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            laplace_kernel_size: DEFAULT_LAPLACE_KERNEL_SIZE,
            filter_threshold: DEFAULT_FILTER_THRESHOLD,
            struct_shape: StructShape::default(),
            dilate_struct_size: DEFAULT_DILATE_STRUCT_SIZE,
            similarity_enabled: true,
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            similar_count_threshold: DEFAULT_SIMILAR_COUNT_THRESHOLD,
        }
    }
}

impl FilterConfig {
    /// Whether `ksize` is an acceptable Laplacian aperture.
    pub fn is_valid_kernel_size(ksize: u32) -> bool {
        ksize % 2 == 1
    }

    /// Return `self` with an even `laplace_kernel_size` replaced by the one
    /// from `previous`. All other fields are taken as given.
    pub fn validated(mut self, previous: &FilterConfig) -> Self {
        if !Self::is_valid_kernel_size(self.laplace_kernel_size) {
            self.laplace_kernel_size = previous.laplace_kernel_size;
        }
        self
    }
}
