#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the viewer module.
pub mod error;

/// viewer state and the parameters-to-frame pipeline.
pub mod viewer;

pub use crate::error::ViewerError;
pub use crate::viewer::{SharpenParams, SharpenViewer};
