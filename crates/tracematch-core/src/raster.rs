//! Raster - decoded RGBA image container
//!
//! The `Raster` structure holds decoded pixel data (8-bit RGBA) handed over
//! by the caller. Decoding image files is outside this crate: whatever
//! loads the image converts it to RGBA first, either directly via
//! [`Raster::from_rgba_data`] or through the `image` crate via
//! [`Raster::from_image`].
//!
//! The rasterization pipeline lives here as [`Raster::intensity_vector`]:
//! resample to a fixed square grid, then collapse each pixel to a BT.601
//! luminance scalar.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::colorspace;
use crate::error::{Error, Result};
use crate::vector::IntensityVector;

/// Default side of the downsampled grid (50x50, so 2500 elements per vector)
pub const DEFAULT_GRID_SIDE: u32 = 50;

/// Decoded RGBA image
///
/// Pixel data is stored as 8-bit RGBA in row-major order. A `Raster` is
/// read-only once constructed; the conversion to an [`IntensityVector`]
/// never mutates it.
///
/// # Examples
///
/// ```
/// use tracematch_core::Raster;
///
/// // A 2x2 opaque white image
/// let raster = Raster::from_rgba_data(2, 2, vec![255; 16]).unwrap();
/// assert_eq!(raster.dimensions(), (2, 2));
/// assert_eq!(raster.get_rgba(1, 1), Some((255, 255, 255, 255)));
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    pixels: RgbaImage,
}

impl Raster {
    /// Create a Raster from a raw RGBA byte buffer
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `data` - Pixel data, 4 bytes per pixel (RGBA), row-major
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::BufferSize`] if `data.len() != width * height * 4`.
    pub fn from_rgba_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize) * 4;
        let actual = data.len();
        if actual != expected {
            return Err(Error::BufferSize { expected, actual });
        }

        // from_raw only rejects undersized buffers; length is validated above.
        let pixels = RgbaImage::from_raw(width, height, data)
            .ok_or(Error::BufferSize { expected, actual })?;

        Ok(Raster { pixels })
    }

    /// Create a Raster from any decoded image
    ///
    /// The image is converted to 8-bit RGBA; all pixel formats the `image`
    /// crate can represent are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the image is empty in either
    /// axis.
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        let pixels = image.to_rgba8();
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Raster { pixels })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Get the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Get RGBA values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.pixels.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            (r, g, b, a)
        })
    }

    /// Get raw access to the RGBA bytes (row-major, 4 bytes per pixel).
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Convert this raster to a grayscale intensity vector
    ///
    /// The raster is resampled to exactly `side` x `side` pixels and each
    /// resulting pixel is collapsed to a BT.601 luminance scalar (alpha is
    /// ignored). Elements are appended in row-major order, so the result has
    /// length `side * side` with every element in `[0, 255]`.
    ///
    /// Resampling uses a fixed triangle filter; a raster already at the
    /// target size is passed through unresampled. Conversion is therefore
    /// deterministic: the same raster always yields the same vector, which
    /// keeps reference and query vectors comparable.
    ///
    /// # Arguments
    ///
    /// * `side` - Side of the square target grid (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `side` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracematch_core::Raster;
    ///
    /// let white = Raster::from_rgba_data(2, 2, vec![255; 16]).unwrap();
    /// let vector = white.intensity_vector(2).unwrap();
    /// assert_eq!(vector.len(), 4);
    /// assert!(vector.as_slice().iter().all(|&v| (v - 255.0).abs() < 1e-3));
    /// ```
    pub fn intensity_vector(&self, side: u32) -> Result<IntensityVector> {
        if side == 0 {
            return Err(Error::InvalidParameter(
                "grid side must be at least 1".to_string(),
            ));
        }

        let scaled = if self.pixels.dimensions() == (side, side) {
            self.pixels.clone()
        } else {
            imageops::resize(&self.pixels, side, side, FilterType::Triangle)
        };

        let mut data = Vec::with_capacity((side as usize) * (side as usize));
        for pixel in scaled.pixels() {
            let [r, g, b, _] = pixel.0;
            data.push(colorspace::rgb_to_gray(r, g, b));
        }

        Ok(IntensityVector::from_vec(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Raster {
        let data: Vec<u8> = rgba
            .iter()
            .copied()
            .cycle()
            .take((width as usize) * (height as usize) * 4)
            .collect();
        Raster::from_rgba_data(width, height, data).unwrap()
    }

    #[test]
    fn test_from_rgba_data() {
        let raster = Raster::from_rgba_data(3, 2, vec![0; 24]).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.as_raw().len(), 24);
    }

    #[test]
    fn test_from_rgba_data_invalid_dimensions() {
        assert!(matches!(
            Raster::from_rgba_data(0, 2, vec![]),
            Err(Error::InvalidDimension { width: 0, height: 2 })
        ));
        assert!(matches!(
            Raster::from_rgba_data(2, 0, vec![]),
            Err(Error::InvalidDimension { width: 2, height: 0 })
        ));
    }

    #[test]
    fn test_from_rgba_data_buffer_size_mismatch() {
        let err = Raster::from_rgba_data(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSize {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn test_from_image_rejects_empty() {
        let empty = DynamicImage::new_rgba8(0, 0);
        assert!(Raster::from_image(&empty).is_err());
    }

    #[test]
    fn test_from_image_converts_to_rgba() {
        let gray = DynamicImage::new_luma8(4, 3);
        let raster = Raster::from_image(&gray).unwrap();
        assert_eq!(raster.dimensions(), (4, 3));
        assert_eq!(raster.get_rgba(0, 0), Some((0, 0, 0, 255)));
    }

    #[test]
    fn test_get_rgba_out_of_bounds() {
        let raster = solid(2, 2, [10, 20, 30, 255]);
        assert_eq!(raster.get_rgba(0, 0), Some((10, 20, 30, 255)));
        assert_eq!(raster.get_rgba(2, 0), None);
        assert_eq!(raster.get_rgba(0, 2), None);
    }

    #[test]
    fn test_intensity_vector_length_and_range() {
        let raster = solid(7, 5, [200, 100, 50, 255]);
        let v = raster.intensity_vector(4).unwrap();
        assert_eq!(v.len(), 16);
        assert!(v.as_slice().iter().all(|&g| (0.0..=255.0).contains(&g)));
    }

    #[test]
    fn test_intensity_vector_same_size_passthrough() {
        // No resampling at the native size: each element is the exact
        // luminance of the corresponding source pixel.
        let data = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 255, // blue
            255, 255, 255, 255, // white
        ];
        let raster = Raster::from_rgba_data(2, 2, data).unwrap();
        let v = raster.intensity_vector(2).unwrap();
        assert!((v.get(0).unwrap() - 0.299 * 255.0).abs() < 1e-3);
        assert!((v.get(1).unwrap() - 0.587 * 255.0).abs() < 1e-3);
        assert!((v.get(2).unwrap() - 0.114 * 255.0).abs() < 1e-3);
        assert!((v.get(3).unwrap() - 255.0).abs() < 1e-3);
    }

    #[test]
    fn test_intensity_vector_alpha_ignored() {
        let opaque = solid(2, 2, [80, 80, 80, 255]);
        let transparent = solid(2, 2, [80, 80, 80, 0]);
        assert_eq!(
            opaque.intensity_vector(2).unwrap(),
            transparent.intensity_vector(2).unwrap()
        );
    }

    #[test]
    fn test_intensity_vector_upsamples() {
        let raster = solid(1, 1, [255, 255, 255, 255]);
        let v = raster.intensity_vector(3).unwrap();
        assert_eq!(v.len(), 9);
        assert!(v.as_slice().iter().all(|&g| (g - 255.0).abs() < 1e-3));
    }

    #[test]
    fn test_intensity_vector_zero_side() {
        let raster = solid(2, 2, [0, 0, 0, 255]);
        assert!(matches!(
            raster.intensity_vector(0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
