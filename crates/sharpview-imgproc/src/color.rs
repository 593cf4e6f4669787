use crate::parallel;
use sharpview_image::{Image, ImageError};

/// Convert an RGB image to BGR by reordering the channels.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output BGR image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use sharpview_image::{Image, ImageSize};
/// use sharpview_imgproc::color::bgr_from_rgb;
///
/// let src = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![0, 1, 2]).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
///
/// bgr_from_rgb(&src, &mut dst).unwrap();
/// assert_eq!(dst.as_slice(), &[2, 1, 0]);
/// ```
pub fn bgr_from_rgb(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // flip only the red and blue channels, keep the green channel as is
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let (r, g, b) = (src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel[0] = b;
        dst_pixel[1] = g;
        dst_pixel[2] = r;
    });

    Ok(())
}

/// Convert a BGR image to RGB by reordering the channels.
///
/// # Arguments
///
/// * `src` - The input BGR image.
/// * `dst` - The output RGB image.
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_bgr(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let (b, g, r) = (src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel[0] = r;
        dst_pixel[1] = g;
        dst_pixel[2] = b;
    });

    Ok(())
}
