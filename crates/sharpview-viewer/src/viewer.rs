use log::debug;

use sharpview_image::{ops, Image};
use sharpview_imgproc::filter::{self, kernels};

use crate::error::ViewerError;

/// User-facing sharpening parameters, as fed in by the UI sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharpenParams {
    /// Sharpening intensity in `[0, 100]`.
    pub strength: u8,
    /// Kernel half-width in `[1, 5]`.
    pub radius: usize,
}

impl Default for SharpenParams {
    /// The rest positions of the sliders: no sharpening, smallest kernel.
    fn default() -> Self {
        Self {
            strength: 0,
            radius: 1,
        }
    }
}

/// The viewer core: owns the loaded frame and the current sharpening
/// parameters, and re-renders through a callback whenever either changes.
///
/// This is the boundary that keeps the kernel math independent of any GUI
/// toolkit: a UI layer feeds slider values into [`SharpenViewer::set_strength`]
/// and [`SharpenViewer::set_radius`] and receives finished RGB frames through
/// the `on_frame` callback, synchronously on the calling thread.
pub struct SharpenViewer<F>
where
    F: FnMut(&Image<u8, 3>),
{
    on_frame: F,
    params: SharpenParams,
    source: Option<Image<f32, 3>>,
}

impl<F> SharpenViewer<F>
where
    F: FnMut(&Image<u8, 3>),
{
    /// Create a viewer with default parameters and no image loaded.
    ///
    /// # Arguments
    ///
    /// * `on_frame` - Called with the rendered RGB frame after every update.
    pub fn new(on_frame: F) -> Self {
        Self {
            on_frame,
            params: SharpenParams::default(),
            source: None,
        }
    }

    /// Get the current sharpening parameters.
    pub fn params(&self) -> SharpenParams {
        self.params
    }

    /// Whether an image has been loaded.
    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    /// Load a new RGB frame and render it at the current parameters.
    ///
    /// The frame is converted to f32 once here; every later parameter change
    /// filters from this pristine copy, so adjustments never compound.
    pub fn load_image(&mut self, image: Image<u8, 3>) -> Result<(), ViewerError> {
        let mut source = Image::from_size_val(image.size(), 0.0f32)?;
        ops::cast_and_scale(&image, &mut source, 1.0)?;

        debug!("loaded image {}", image.size());
        self.source = Some(source);
        self.refresh()
    }

    /// Set the sharpening intensity and re-render.
    ///
    /// # Errors
    ///
    /// Fails fast on an out-of-range value; the previous parameters and the
    /// displayed frame are left untouched.
    pub fn set_strength(&mut self, strength: u8) -> Result<(), ViewerError> {
        if strength > kernels::MAX_STRENGTH {
            return Err(filter::FilterError::InvalidStrength(strength).into());
        }

        debug!("strength changed: {} -> {}", self.params.strength, strength);
        self.params.strength = strength;
        self.refresh()
    }

    /// Set the kernel radius and re-render.
    ///
    /// # Errors
    ///
    /// Fails fast on an out-of-range value; the previous parameters and the
    /// displayed frame are left untouched.
    pub fn set_radius(&mut self, radius: usize) -> Result<(), ViewerError> {
        if !(kernels::MIN_RADIUS..=kernels::MAX_RADIUS).contains(&radius) {
            return Err(filter::FilterError::InvalidRadius(radius).into());
        }

        debug!("radius changed: {} -> {}", self.params.radius, radius);
        self.params.radius = radius;
        self.refresh()
    }

    /// Recompute the kernel, convolve the source and emit a frame.
    ///
    /// Parameter changes before any image is opened are accepted and produce
    /// no frame.
    fn refresh(&mut self) -> Result<(), ViewerError> {
        let Some(source) = &self.source else {
            return Ok(());
        };

        let mut filtered = Image::from_size_val(source.size(), 0.0f32)?;
        filter::sharpen(
            source,
            &mut filtered,
            self.params.strength,
            self.params.radius,
        )?;

        // saturate back into the 8-bit display range
        let mut frame = Image::from_size_val(filtered.size(), 0u8)?;
        ops::cast_and_scale_clamp(&filtered, &mut frame, 1.0)?;

        (self.on_frame)(&frame);
        Ok(())
    }
}
