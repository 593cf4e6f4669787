//! Filter operations
//!
//! This module provides the sharpening filter used by the viewer: kernel
//! construction from the user-facing (strength, radius) parameters and a
//! dense 2D convolution to apply it.

use sharpview_image::ImageError;

/// Filter kernels
pub mod kernels;

/// Dense 2D convolution
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;

/// Errors that can occur during filtering.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// The sharpening strength is outside the supported range.
    #[error("strength must be in [0, {max}], got {0}", max = kernels::MAX_STRENGTH)]
    InvalidStrength(u8),

    /// The kernel radius is outside the supported range.
    #[error("radius must be in [{min}, {max}], got {0}", min = kernels::MIN_RADIUS, max = kernels::MAX_RADIUS)]
    InvalidRadius(usize),

    /// The kernel side length must be odd.
    #[error("kernel side length must be odd, got {0}")]
    EvenKernelSide(usize),

    /// The kernel data length does not match its side length.
    #[error("kernel data length ({0}) does not match side length {1}")]
    InvalidKernelLength(usize, usize),

    /// An error from the underlying image operations.
    #[error(transparent)]
    Image(#[from] ImageError),
}
