use rayon::prelude::*;

use sharpview_image::{Image, ImageError};

use super::{kernels::Kernel2d, FilterError};

/// Apply a dense 2D convolution kernel to an image.
///
/// The kernel is applied to every channel with a sliding-window weighted sum.
/// Pixels outside the image are replicated from the nearest edge, so the
/// output has the same size as the input. Rows are processed in parallel.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The convolution kernel.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn filter_2d<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel: &Kernel2d,
) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(FilterError::Image(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )));
    }

    let rows = src.rows();
    let cols = src.cols();
    let side = kernel.side();
    let half = kernel.radius();

    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_mut(cols * C)
        .enumerate()
        .for_each(|(r, dst_row)| {
            dst_row.chunks_mut(C).enumerate().for_each(|(c, dst_pixel)| {
                let mut sum = [0.0; C];
                for ky in 0..side {
                    // replicate the border by clamping the source coordinates
                    let row = (r + ky).min(rows - 1 + half).max(half) - half;
                    for kx in 0..side {
                        let col = (c + kx).min(cols - 1 + half).max(half) - half;
                        let weight = kernel.get(ky, kx);
                        let src_pix_offset = (row * cols + col) * C;
                        for ch in 0..C {
                            sum[ch] += src_data[src_pix_offset + ch] * weight;
                        }
                    }
                }
                dst_pixel.copy_from_slice(&sum);
            });
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::kernels::sharpen_kernel_2d;
    use sharpview_image::ImageSize;

    #[test]
    fn test_filter_2d_identity_is_exact() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 4,
            height: 3,
        };
        let img = Image::<f32, 1>::new(size, (0..12).map(|x| x as f32 * 0.37).collect())?;
        let mut dst = Image::<f32, 1>::from_size_val(size, -1.0)?;

        // strength 0 degenerates to the identity kernel, for every radius
        for radius in 1..=5 {
            let kernel = sharpen_kernel_2d(0, radius)?;
            filter_2d(&img, &mut dst, &kernel)?;
            assert_eq!(dst.as_slice(), img.as_slice());
        }

        Ok(())
    }

    #[test]
    fn test_filter_2d_flat_image_unchanged() -> Result<(), FilterError> {
        // a unit-sum kernel must preserve a constant image
        let size = ImageSize {
            width: 6,
            height: 6,
        };
        let img = Image::<f32, 3>::from_size_val(size, 42.0)?;
        let mut dst = Image::<f32, 3>::from_size_val(size, 0.0)?;

        let kernel = sharpen_kernel_2d(100, 2)?;
        filter_2d(&img, &mut dst, &kernel)?;

        for &v in dst.as_slice() {
            approx::assert_relative_eq!(v, 42.0, epsilon = 1e-3);
        }

        Ok(())
    }

    #[test]
    fn test_filter_2d_sharpen_center_pixel() -> Result<(), FilterError> {
        // a single bright pixel on a flat background gets amplified
        let size = ImageSize {
            width: 5,
            height: 5,
        };
        let mut data = vec![10.0; 25];
        data[12] = 20.0;
        let img = Image::<f32, 1>::new(size, data)?;
        let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;

        let kernel = sharpen_kernel_2d(100, 1)?;
        filter_2d(&img, &mut dst, &kernel)?;

        // center: 5 * 20 - 4 * 10 = 60
        assert_eq!(*dst.get_pixel(2, 2, 0)?, 60.0);
        // 4-neighbor: 5 * 10 - (3 * 10 + 20) = 0
        assert_eq!(*dst.get_pixel(1, 2, 0)?, 0.0);
        // corner of the footprint is untouched
        assert_eq!(*dst.get_pixel(0, 0, 0)?, 10.0);

        Ok(())
    }

    #[test]
    fn test_filter_2d_size_mismatch() -> Result<(), FilterError> {
        let img = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0.0,
        )?;
        let mut dst = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 4,
            },
            0.0,
        )?;

        let kernel = sharpen_kernel_2d(50, 1)?;
        let res = filter_2d(&img, &mut dst, &kernel);
        assert!(matches!(
            res,
            Err(FilterError::Image(ImageError::InvalidImageSize(..)))
        ));

        Ok(())
    }
}
