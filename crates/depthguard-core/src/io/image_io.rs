use std::path::Path;

use image::{DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma};
use ndarray::Array2;

use crate::consts::TRUSTED;
use crate::error::{DepthGuardError, Result};
use crate::frame::{Frame, TrustMask};

use super::raw::DepthImage16;

/// Load a grayscale depth image (8- or 16-bit) into a Frame.
///
/// Sample values are kept in sensor units; nothing is normalized. Other
/// pixel formats are converted to 16-bit luminance first.
pub fn load_depth_png(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(DepthGuardError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    let shape = (h as usize, w as usize);
    let data = match img {
        DynamicImage::ImageLuma8(gray) => Array2::from_shape_fn(shape, |(row, col)| {
            gray.get_pixel(col as u32, row as u32).0[0] as f32
        }),
        DynamicImage::ImageLuma16(gray) => Array2::from_shape_fn(shape, |(row, col)| {
            gray.get_pixel(col as u32, row as u32).0[0] as f32
        }),
        other => {
            let gray = other.to_luma16();
            Array2::from_shape_fn(shape, |(row, col)| {
                gray.get_pixel(col as u32, row as u32).0[0] as f32
            })
        }
    };

    Ok(Frame::new(data))
}

/// Save a 16-bit depth image as grayscale PNG.
pub fn save_depth_png(depth: &DepthImage16, path: &Path) -> Result<()> {
    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(
        depth.width,
        depth.height,
        depth.data.clone(),
    )
    .ok_or(DepthGuardError::InvalidDimensions {
        width: depth.width,
        height: depth.height,
    })?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a trust mask as 8-bit PNG: trusted pixels white, discarded black.
pub fn save_mask_png(mask: &TrustMask, path: &Path) -> Result<()> {
    let (h, w) = mask.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for ((row, col), &m) in mask.indexed_iter() {
        let val = if m == TRUSTED { 255 } else { 0 };
        img.put_pixel(col as u32, row as u32, Luma([val]));
    }
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
