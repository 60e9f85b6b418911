//! Colorspace conversion
//!
//! RGB to grayscale conversion using the ITU-R BT.601 luma weights.
//! Reference vectors and query vectors are only comparable when both were
//! produced with the same weights, so the coefficients are fixed constants
//! rather than parameters.

/// BT.601 red weight
pub const RED_WEIGHT: f32 = 0.299;

/// BT.601 green weight
pub const GREEN_WEIGHT: f32 = 0.587;

/// BT.601 blue weight
pub const BLUE_WEIGHT: f32 = 0.114;

/// Convert RGB to a grayscale intensity using ITU-R BT.601 coefficients
///
/// Formula: `gray = 0.299*R + 0.587*G + 0.114*B`
///
/// The result is not rounded or clamped; for 8-bit inputs it lies in
/// `[0, 255]`.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> f32 {
    RED_WEIGHT * r as f32 + GREEN_WEIGHT * g as f32 + BLUE_WEIGHT * b as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_is_zero() {
        assert_eq!(rgb_to_gray(0, 0, 0), 0.0);
    }

    #[test]
    fn test_white_is_full_scale() {
        // The weights sum to 1, so pure white maps to (almost exactly) 255.
        let gray = rgb_to_gray(255, 255, 255);
        assert!((gray - 255.0).abs() < 1e-3, "got {gray}");
    }

    #[test]
    fn test_channel_weights() {
        assert!((rgb_to_gray(255, 0, 0) - 0.299 * 255.0).abs() < 1e-3);
        assert!((rgb_to_gray(0, 255, 0) - 0.587 * 255.0).abs() < 1e-3);
        assert!((rgb_to_gray(0, 0, 255) - 0.114 * 255.0).abs() < 1e-3);
    }

    #[test]
    fn test_green_dominates() {
        // Green carries the largest weight of the three channels.
        assert!(rgb_to_gray(0, 128, 0) > rgb_to_gray(128, 0, 0));
        assert!(rgb_to_gray(128, 0, 0) > rgb_to_gray(0, 0, 128));
    }
}
