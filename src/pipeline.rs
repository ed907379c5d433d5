//! # Image → MBD Pipeline
//!
//! Top-level conversion: a raster color image in, the complete MBD byte
//! stream out.
//!
//! ```text
//! image ──resize──► 360-dot rows ──invert──► CMY ──dither──► bit planes
//!                                                               │
//!            blob ◄──frame◄── pack ◄── arrange ◄── compose ◄────┘
//! ```
//!
//! Everything after the resize is deterministic and pure: a given input
//! always produces the same byte-exact document.

use image::{DynamicImage, RgbImage, imageops::FilterType};

use crate::error::MbrushError;
use crate::printhead::PrintheadConfig;
use crate::protocol::document::encode_document;
use crate::render::dither::{CmyBitmap, invert};

/// Convert an image into a complete MBD document.
///
/// The image is resized so its height matches the printhead's working line
/// width (aspect ratio preserved), inverted from RGB to CMY, dithered per
/// channel, and framed. Grayscale input is promoted to RGB first, so all
/// three ink channels carry the same pattern.
///
/// ## Example
///
/// ```
/// use image::DynamicImage;
/// use mbrush::printhead::PrintheadConfig;
/// use mbrush::pipeline::image_to_mbd;
///
/// // A single-column black stripe at working resolution
/// let image = DynamicImage::new_rgb8(1, 360); // zero-filled = black
/// let mbd = image_to_mbd(&image, &PrintheadConfig::MBRUSH).unwrap();
///
/// assert_eq!(mbd.len(), 16 + 65 * 272);
/// ```
pub fn image_to_mbd(
    image: &DynamicImage,
    config: &PrintheadConfig,
) -> Result<Vec<u8>, MbrushError> {
    let rgb = resize_to_line_width(image, config)?;
    let bitmap = dither_rgb(&rgb, config)?;
    encode_document(&bitmap, config)
}

/// Scale an image so its height equals the working line width.
///
/// Bilinear, aspect-preserving; the new width is truncated toward zero
/// (minimum 1). Images already at working height pass through untouched.
pub fn resize_to_line_width(
    image: &DynamicImage,
    config: &PrintheadConfig,
) -> Result<RgbImage, MbrushError> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(MbrushError::Image("empty image".to_string()));
    }
    if height == config.line_width {
        return Ok(rgb);
    }

    let scale = config.line_width as f32 / height as f32;
    let new_width = ((width as f32 * scale) as u32).max(1);
    Ok(image::imageops::resize(
        &rgb,
        new_width,
        config.line_width,
        FilterType::Triangle,
    ))
}

/// Invert an RGB image to CMY and dither each channel.
///
/// The image must already be at working height; each channel is diffused
/// independently in raster order.
pub fn dither_rgb(rgb: &RgbImage, config: &PrintheadConfig) -> Result<CmyBitmap, MbrushError> {
    let (width, height) = rgb.dimensions();
    if height != config.line_width {
        return Err(MbrushError::LineLength {
            expected: config.line_width as usize,
            actual: height as usize,
        });
    }

    let (width, height) = (width as usize, height as usize);
    let mut planes = [
        vec![0u8; width * height],
        vec![0u8; width * height],
        vec![0u8; width * height],
    ];
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let idx = y as usize * width + x as usize;
        planes[0][idx] = invert(pixel[0]); // R -> C
        planes[1][idx] = invert(pixel[1]); // G -> M
        planes[2][idx] = invert(pixel[2]); // B -> Y
    }

    CmyBitmap::dither(planes, width, height)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_resize_passthrough_at_working_height() {
        let image = DynamicImage::new_rgb8(10, 360);
        let rgb = resize_to_line_width(&image, &PrintheadConfig::MBRUSH).unwrap();
        assert_eq!(rgb.dimensions(), (10, 360));
    }

    #[test]
    fn test_resize_preserves_aspect() {
        // 100x720 halves to 50x360.
        let image = DynamicImage::new_rgb8(100, 720);
        let rgb = resize_to_line_width(&image, &PrintheadConfig::MBRUSH).unwrap();
        assert_eq!(rgb.dimensions(), (50, 360));
    }

    #[test]
    fn test_resize_width_truncates() {
        // 5x720: 5 * 0.5 = 2.5 truncates to 2, matching the reference.
        let image = DynamicImage::new_rgb8(5, 720);
        let rgb = resize_to_line_width(&image, &PrintheadConfig::MBRUSH).unwrap();
        assert_eq!(rgb.dimensions(), (2, 360));
    }

    #[test]
    fn test_empty_image_rejected() {
        let image = DynamicImage::new_rgb8(0, 0);
        let err = resize_to_line_width(&image, &PrintheadConfig::MBRUSH).unwrap_err();
        assert!(matches!(err, MbrushError::Image(_)));
    }

    #[test]
    fn test_black_image_dithers_to_solid_ink() {
        let rgb = RgbImage::from_pixel(2, 360, Rgb([0, 0, 0]));
        let bitmap = dither_rgb(&rgb, &PrintheadConfig::MBRUSH).unwrap();
        for channel in crate::render::Channel::ALL {
            for row in 0..360 {
                for col in 0..2 {
                    assert_eq!(bitmap.sample(channel, row, col), 1);
                }
            }
        }
    }

    #[test]
    fn test_white_image_dithers_to_no_ink() {
        let rgb = RgbImage::from_pixel(2, 360, Rgb([255, 255, 255]));
        let bitmap = dither_rgb(&rgb, &PrintheadConfig::MBRUSH).unwrap();
        for channel in crate::render::Channel::ALL {
            assert_eq!(bitmap.sample(channel, 0, 0), 0);
            assert_eq!(bitmap.sample(channel, 359, 1), 0);
        }
    }

    #[test]
    fn test_wrong_height_rejected() {
        let rgb = RgbImage::new(2, 100);
        let err = dither_rgb(&rgb, &PrintheadConfig::MBRUSH).unwrap_err();
        assert!(matches!(err, MbrushError::LineLength { .. }));
    }
}
