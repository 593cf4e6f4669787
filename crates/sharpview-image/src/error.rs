/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image width or height is zero.
    #[error("Image dimensions must be non-zero, got ({0}x{1})")]
    ZeroImageSize(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Image size mismatch: expected ({0}x{1}), got ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel value cannot be represented in the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when a pixel coordinate is out of bounds.
    #[error("Pixel coordinate ({0}, {1}) channel {2} is out of bounds")]
    PixelIndexOutOfBounds(usize, usize, usize),
}
