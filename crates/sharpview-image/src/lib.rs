#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation shared between the display and processing layers.
pub mod image;

/// Error types for the image module.
pub mod error;

/// operations to cast and scale image pixel data.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
