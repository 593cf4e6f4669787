use sharpview_image::ImageError;
use sharpview_imgproc::filter::FilterError;

/// An error type for the viewer module.
#[derive(thiserror::Error, Debug)]
pub enum ViewerError {
    /// An error from the filtering pipeline.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// An error from the underlying image operations.
    #[error(transparent)]
    Image(#[from] ImageError),
}
