use super::FilterError;

/// Maximum sharpening strength accepted by [`sharpen_kernel_2d`].
pub const MAX_STRENGTH: u8 = 100;

/// Minimum kernel radius accepted by [`sharpen_kernel_2d`].
pub const MIN_RADIUS: usize = 1;

/// Maximum kernel radius accepted by [`sharpen_kernel_2d`].
///
/// Keeps the kernel bounded at 11x11, so a convolution pass stays cheap
/// enough to run synchronously on every slider change.
pub const MAX_RADIUS: usize = 5;

/// A square 2D convolution kernel with odd side length.
///
/// The kernel is immutable once produced; the weights are stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel2d {
    side: usize,
    data: Vec<f32>,
}

impl Kernel2d {
    /// Create a new kernel from row-major weights.
    ///
    /// # Arguments
    ///
    /// * `side` - The side length of the kernel. Must be odd.
    /// * `data` - The kernel weights, of length `side * side`.
    pub fn new(side: usize, data: Vec<f32>) -> Result<Self, FilterError> {
        if side % 2 == 0 {
            return Err(FilterError::EvenKernelSide(side));
        }
        if data.len() != side * side {
            return Err(FilterError::InvalidKernelLength(data.len(), side));
        }
        Ok(Self { side, data })
    }

    /// Get the side length of the kernel.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Get the half-width of the kernel.
    pub fn radius(&self) -> usize {
        self.side / 2
    }

    /// Get the kernel weights as a row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Get the weight at the given row and column.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.side + col]
    }

    /// Get the sum of all kernel weights.
    ///
    /// Accumulated in f64 so the result reflects the stored weights rather
    /// than f32 summation order.
    pub fn sum(&self) -> f32 {
        self.data.iter().map(|&w| w as f64).sum::<f64>() as f32
    }
}

/// Create a sharpening kernel from the viewer's slider parameters.
///
/// The kernel is a Laplacian-style filter of side `2 * radius + 1`: every cell
/// within Manhattan distance `radius` of the center (a diamond footprint, not
/// the full square) gets the weight `-(strength / 100)`, and the center weight
/// is chosen so that all weights sum to one. A unit sum keeps the overall
/// image brightness unchanged under convolution.
///
/// With `strength == 0` the kernel degenerates to the identity; with
/// `radius == 1` and `strength == 100` it is the classic 3x3 cross-shaped
/// sharpen (center 5, the four edge neighbors -1, corners 0).
///
/// # Arguments
///
/// * `strength` - The sharpening intensity in `[0, 100]`.
/// * `radius` - The kernel half-width in `[1, 5]`.
///
/// # Errors
///
/// Fails fast with [`FilterError::InvalidStrength`] or
/// [`FilterError::InvalidRadius`] on out-of-range parameters rather than
/// producing a malformed kernel.
pub fn sharpen_kernel_2d(strength: u8, radius: usize) -> Result<Kernel2d, FilterError> {
    if strength > MAX_STRENGTH {
        return Err(FilterError::InvalidStrength(strength));
    }
    if !(MIN_RADIUS..=MAX_RADIUS).contains(&radius) {
        return Err(FilterError::InvalidRadius(radius));
    }

    let side = 2 * radius + 1;
    // computed in f64 and rounded once on store, so the stored weights keep
    // the unit sum within f32 representation error at every radius
    let outer = -(strength as f64 / 100.0);

    let mut data = vec![0.0; side * side];
    let mut count = 0usize;

    for i in 0..side {
        for j in 0..side {
            let manhattan = radius.abs_diff(i) + radius.abs_diff(j);
            if manhattan == 0 || manhattan > radius {
                continue;
            }
            data[i * side + j] = outer as f32;
            count += 1;
        }
    }

    // the center weight cancels the off-center mass so the total stays 1
    data[radius * side + radius] = (1.0 - count as f64 * outer) as f32;

    Kernel2d::new(side, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sharpen_kernel_shape() -> Result<(), FilterError> {
        for radius in MIN_RADIUS..=MAX_RADIUS {
            let kernel = sharpen_kernel_2d(50, radius)?;
            assert_eq!(kernel.side(), 2 * radius + 1);
            assert_eq!(kernel.radius(), radius);
            assert_eq!(kernel.as_slice().len(), kernel.side() * kernel.side());
        }
        Ok(())
    }

    #[test]
    fn test_sharpen_kernel_unit_sum() -> Result<(), FilterError> {
        // the full parameter grid; the worst accumulation case is high
        // strength at the largest radius
        for strength in 0..=100 {
            for radius in MIN_RADIUS..=MAX_RADIUS {
                let kernel = sharpen_kernel_2d(strength, radius)?;
                assert_relative_eq!(kernel.sum(), 1.0, epsilon = 1e-5);
            }
        }
        Ok(())
    }

    #[test]
    fn test_sharpen_kernel_unit_sum_worst_case() -> Result<(), FilterError> {
        // strength 99 is not exactly representable in binary; at radius 5 its
        // 60 off-center weights amplify any rounding of the center weight
        let kernel = sharpen_kernel_2d(99, 5)?;
        let sum = kernel.as_slice().iter().map(|&w| w as f64).sum::<f64>();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-5);
        assert_relative_eq!(kernel.sum(), 1.0, epsilon = 1e-5);
        Ok(())
    }

    #[test]
    fn test_sharpen_kernel_zero_strength_is_identity() -> Result<(), FilterError> {
        for radius in MIN_RADIUS..=MAX_RADIUS {
            let kernel = sharpen_kernel_2d(0, radius)?;
            for i in 0..kernel.side() {
                for j in 0..kernel.side() {
                    let expected = if i == radius && j == radius { 1.0 } else { 0.0 };
                    assert_eq!(kernel.get(i, j), expected);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_sharpen_kernel_radius1_full_strength() -> Result<(), FilterError> {
        let kernel = sharpen_kernel_2d(100, 1)?;

        #[rustfmt::skip]
        assert_eq!(
            kernel.as_slice(),
            &[
                0.0, -1.0, 0.0,
                -1.0, 5.0, -1.0,
                0.0, -1.0, 0.0,
            ],
        );

        Ok(())
    }

    #[test]
    fn test_sharpen_kernel_diamond_footprint() -> Result<(), FilterError> {
        let kernel = sharpen_kernel_2d(100, 2)?;

        // corners of the 5x5 square are outside the diamond
        assert_eq!(kernel.get(0, 0), 0.0);
        assert_eq!(kernel.get(0, 4), 0.0);
        assert_eq!(kernel.get(4, 0), 0.0);
        assert_eq!(kernel.get(4, 4), 0.0);

        // diamond tips and edge midpoints are inside
        assert_eq!(kernel.get(0, 2), -1.0);
        assert_eq!(kernel.get(2, 0), -1.0);
        assert_eq!(kernel.get(1, 1), -1.0);

        // 12 off-center cells within manhattan distance 2
        assert_eq!(kernel.get(2, 2), 13.0);

        Ok(())
    }

    #[test]
    fn test_sharpen_kernel_strength_monotonicity() -> Result<(), FilterError> {
        for radius in MIN_RADIUS..=MAX_RADIUS {
            let mut prev_outer = 0.0;
            let mut prev_center = 0.0;
            for strength in (0..=100).step_by(10) {
                let kernel = sharpen_kernel_2d(strength, radius)?;
                let outer_mag = -kernel.get(radius, radius - 1);
                let center = kernel.get(radius, radius);
                if strength > 0 {
                    assert!(outer_mag > prev_outer);
                    assert!(center > prev_center);
                }
                prev_outer = outer_mag;
                prev_center = center;
            }
        }
        Ok(())
    }

    #[test]
    fn test_sharpen_kernel_invalid_params() {
        assert!(matches!(
            sharpen_kernel_2d(101, 1),
            Err(FilterError::InvalidStrength(101))
        ));
        assert!(matches!(
            sharpen_kernel_2d(50, 0),
            Err(FilterError::InvalidRadius(0))
        ));
        assert!(matches!(
            sharpen_kernel_2d(50, 6),
            Err(FilterError::InvalidRadius(6))
        ));
    }

    #[test]
    fn test_kernel2d_new_validation() {
        assert!(matches!(
            Kernel2d::new(2, vec![0.0; 4]),
            Err(FilterError::EvenKernelSide(2))
        ));
        assert!(matches!(
            Kernel2d::new(3, vec![0.0; 8]),
            Err(FilterError::InvalidKernelLength(8, 3))
        ));
    }
}
