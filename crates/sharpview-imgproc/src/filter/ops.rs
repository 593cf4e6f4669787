use sharpview_image::Image;

use super::{filter_2d, kernels, FilterError};

/// Sharpen an image with the viewer's slider parameters.
///
/// Builds the Manhattan-distance sharpening kernel for `(strength, radius)`
/// and applies it with [`filter_2d`]. This is the per-update path: the kernel
/// is recomputed on every parameter change and consumed once.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `strength` - The sharpening intensity in `[0, 100]`.
/// * `radius` - The kernel half-width in `[1, 5]`.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn sharpen<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    strength: u8,
    radius: usize,
) -> Result<(), FilterError> {
    let kernel = kernels::sharpen_kernel_2d(strength, radius)?;
    filter_2d(src, dst, &kernel)?;
    Ok(())
}
