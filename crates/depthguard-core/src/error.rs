use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepthGuardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported depth encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image buffer too short: expected {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("Row step {step} is smaller than a packed row ({min} bytes)")]
    InvalidStep { step: usize, min: usize },
}

pub type Result<T> = std::result::Result<T, DepthGuardError>;
