/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default Laplacian aperture size. Must be odd.
pub const DEFAULT_LAPLACE_KERNEL_SIZE: u32 = 3;

/// Default absolute edge response above which a pixel counts as "on an edge".
pub const DEFAULT_FILTER_THRESHOLD: f32 = 100.0;

/// Default side length of the dilation structuring element.
pub const DEFAULT_DILATE_STRUCT_SIZE: u32 = 3;

/// Default maximum depth difference for a neighbor to count as similar.
pub const DEFAULT_DISTANCE_THRESHOLD: f32 = 20.0;

/// Default number of similar neighbors that must be exceeded to rescue a pixel.
pub const DEFAULT_SIMILAR_COUNT_THRESHOLD: u32 = 4;

/// Number of neighbors inspected by the similarity rescue pass.
pub const NEIGHBOR_COUNT: u32 = 8;

/// Largest value representable in a 16-bit depth image.
pub const DEPTH_U16_MAX: f32 = 65_535.0;

/// Trust mask value for a kept pixel.
pub const TRUSTED: f32 = 1.0;

/// Trust mask value for a discarded pixel.
pub const DISCARDED: f32 = 0.0;
