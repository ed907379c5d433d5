//! # Floyd–Steinberg Error Diffusion
//!
//! This module converts continuous-tone (0–255) channel data into binary
//! (0/1) ink decisions using Floyd–Steinberg error diffusion.
//!
//! ## What is Error Diffusion?
//!
//! Each nozzle either fires or it doesn't, so a 50% magenta pixel cannot be
//! printed directly. Error diffusion thresholds each pixel and pushes the
//! rounding error into neighbors that have not been visited yet, so the
//! *local average* of the binary output tracks the source intensity.
//!
//! ## The Kernel
//!
//! Pixels are processed in strict raster order (top-to-bottom,
//! left-to-right, no serpentine alternation). Each pixel is thresholded at
//! 0.5 and its error distributed forward:
//!
//! ```text
//!             ┌───────┬───────┐
//!             │   *   │ 7/16  │        * = current pixel
//!     ┌───────┼───────┼───────┤
//!     │ 3/16  │ 5/16  │ 1/16  │        (next row)
//!     └───────┴───────┴───────┘
//! ```
//!
//! The weights sum to exactly 16/16, so ink mass is conserved except at the
//! padded border, where leftover error falls off the page.
//!
//! ## Ordering Contract
//!
//! The traversal order and weights are part of the codec contract, not an
//! implementation detail: the printer's line pattern is built from column
//! slices of this output, so a reimplementation must stay bit-for-bit
//! identical. For the same reason a dithering pass cannot be parallelized —
//! every pixel reads neighbor values mutated earlier in the same pass.
//! Independent color channels may be dithered separately; each channel sees
//! only its own plane, so per-channel processing matches the interleaved
//! reference behavior exactly.
//!
//! ## Padding
//!
//! The working buffer carries one extra zero row at the bottom and one extra
//! zero column on each side, so every real pixel has valid neighbors to its
//! right and below. The padding is cropped before returning.

use crate::error::MbrushError;

// ============================================================================
// INK CHANNELS
// ============================================================================

/// One of the three ink channels, in plane storage order.
///
/// The MBrush is a subtractive CMY device: RGB source data is inverted
/// (`255 - value`) on entry, mapping R→C, G→M, B→Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Cyan,
    Magenta,
    Yellow,
}

impl Channel {
    /// All channels in plane storage order.
    pub const ALL: [Self; 3] = [Self::Cyan, Self::Magenta, Self::Yellow];

    /// Index of this channel's plane within a [`CmyBitmap`].
    #[inline]
    pub fn plane_index(self) -> usize {
        match self {
            Self::Cyan => 0,
            Self::Magenta => 1,
            Self::Yellow => 2,
        }
    }

    /// How many `color_interval` steps this channel's nozzle row trails the
    /// cyan row by. At head step `i` the channel fires source column
    /// `i - stagger() * color_interval`.
    #[inline]
    pub fn stagger(self) -> usize {
        match self {
            Self::Cyan => 0,
            Self::Magenta => 1,
            Self::Yellow => 2,
        }
    }
}

// ============================================================================
// DITHERED CMY BITMAP
// ============================================================================

/// Binary CMY ink decisions for one working-resolution image.
///
/// Three row-major planes of identical `width * height` shape; every sample
/// is 0 (no ink) or 1 (fire nozzle). This is the output of the dithering
/// stage and the input to per-line compositing.
#[derive(Debug, Clone)]
pub struct CmyBitmap {
    width: usize,
    height: usize,
    planes: [Vec<u8>; 3],
}

impl CmyBitmap {
    /// Build a bitmap from three pre-dithered planes.
    ///
    /// ## Errors
    ///
    /// - [`MbrushError::PlaneSize`] if any plane is not `width * height` long
    /// - [`MbrushError::NonBinary`] if any sample is outside {0, 1}
    pub fn from_planes(
        planes: [Vec<u8>; 3],
        width: usize,
        height: usize,
    ) -> Result<Self, MbrushError> {
        let expected = width * height;
        for plane in &planes {
            if plane.len() != expected {
                return Err(MbrushError::PlaneSize {
                    expected,
                    actual: plane.len(),
                });
            }
            if let Some(index) = plane.iter().position(|&v| v > 1) {
                return Err(MbrushError::NonBinary {
                    index,
                    value: plane[index],
                });
            }
        }
        Ok(Self {
            width,
            height,
            planes,
        })
    }

    /// Dither three continuous-tone CMY planes into a binary bitmap.
    pub fn dither(
        planes: [Vec<u8>; 3],
        width: usize,
        height: usize,
    ) -> Result<Self, MbrushError> {
        let [c, m, y] = planes;
        let planes = [
            dither_plane(&c, width, height)?,
            dither_plane(&m, width, height)?,
            dither_plane(&y, width, height)?,
        ];
        Self::from_planes(planes, width, height)
    }

    /// Image width in columns (one head step per column plus ramp lines).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in rows (the working line width, normally 360).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// One binary sample from a channel plane.
    #[inline]
    pub fn sample(&self, channel: Channel, row: usize, col: usize) -> u8 {
        self.planes[channel.plane_index()][row * self.width + col]
    }
}

// ============================================================================
// ERROR DIFFUSION
// ============================================================================

/// Dither one continuous-tone plane to binary ink decisions.
///
/// ## Parameters
///
/// - `samples`: row-major 0–255 samples, `width * height` long
/// - `width`, `height`: plane dimensions
///
/// ## Returns
///
/// A same-shape row-major plane containing only 0 and 1.
///
/// ## Algorithm
///
/// ```text
/// normalize to f32 in [0, 1]
/// pad: one zero row below, one zero column left and right
/// for each row, for each column (raster order):
///     new   = 1.0 if old >= 0.5 else 0.0
///     error = old - new
///     right      += 7/16 * error
///     below-left += 3/16 * error
///     below      += 5/16 * error
///     below-right+= 1/16 * error
/// crop padding, cast to u8
/// ```
///
/// ## Example
///
/// ```
/// use mbrush::render::dither::dither_plane;
///
/// // Solid ink stays solid: the error term is always zero
/// let black = dither_plane(&[255u8; 12], 4, 3).unwrap();
/// assert_eq!(black, vec![1u8; 12]);
///
/// let white = dither_plane(&[0u8; 12], 4, 3).unwrap();
/// assert_eq!(white, vec![0u8; 12]);
/// ```
///
/// ## Errors
///
/// [`MbrushError::PlaneSize`] if `samples.len() != width * height`.
pub fn dither_plane(
    samples: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, MbrushError> {
    if samples.len() != width * height {
        return Err(MbrushError::PlaneSize {
            expected: width * height,
            actual: samples.len(),
        });
    }

    // Padded working buffer: +1 row below, +1 column on each side.
    let padded_width = width + 2;
    let mut buf = vec![0.0f32; (height + 1) * padded_width];
    for y in 0..height {
        for x in 0..width {
            buf[y * padded_width + x + 1] = samples[y * width + x] as f32 / 255.0;
        }
    }

    for y in 0..height {
        for x in 1..=width {
            let idx = y * padded_width + x;
            let old = buf[idx];
            let new = if old >= 0.5 { 1.0 } else { 0.0 };
            buf[idx] = new;
            let error = old - new;
            buf[idx + 1] += 7.0 / 16.0 * error;
            buf[idx + padded_width - 1] += 3.0 / 16.0 * error;
            buf[idx + padded_width] += 5.0 / 16.0 * error;
            buf[idx + padded_width + 1] += 1.0 / 16.0 * error;
        }
    }

    // Crop the padding; every visited pixel is exactly 0.0 or 1.0.
    let mut out = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            out[y * width + x] = buf[y * padded_width + x + 1] as u8;
        }
    }
    Ok(out)
}

/// Invert an 8-bit sample from additive (RGB) to subtractive (CMY) space.
///
/// ## Example
///
/// ```
/// use mbrush::render::dither::invert;
///
/// assert_eq!(invert(0), 255);   // black ink everywhere
/// assert_eq!(invert(255), 0);   // white paper, no ink
/// ```
#[inline]
pub fn invert(value: u8) -> u8 {
    255 - value
}

// ============================================================================
// TESTS
// ============================================================================
