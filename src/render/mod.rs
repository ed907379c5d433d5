//! # Rendering Module
//!
//! This module converts continuous-tone image data into the binary ink
//! planes consumed by the wire-format stages in [`crate::protocol`].
//!
//! ## Modules
//!
//! - [`dither`]: Floyd–Steinberg error diffusion and the CMY bit planes
//!
//! ## Usage Example
//!
//! ```
//! use mbrush::render::dither;
//!
//! // Dither a 4x4 mid-gray plane to binary ink decisions
//! let plane = vec![128u8; 16];
//! let bits = dither::dither_plane(&plane, 4, 4).unwrap();
//!
//! assert_eq!(bits.len(), 16);
//! assert!(bits.iter().all(|&b| b <= 1));
//! ```

pub mod dither;

pub use dither::{Channel, CmyBitmap};
