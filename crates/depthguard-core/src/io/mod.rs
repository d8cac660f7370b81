pub mod image_io;
pub mod raw;

pub use image_io::{load_depth_png, save_depth_png, save_mask_png};
pub use raw::{DepthEncoding, DepthImage16, RawDepthImage};
