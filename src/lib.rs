//! # mbrush - MBD Encoder for the MBrush Handheld Printer
//!
//! mbrush converts raster color images into the exact binary command stream
//! (the "MBD document") consumed by the MBrush handheld CMY inkjet printer.
//! The device fires three ink channels through physically offset nozzle rows
//! as the head is dragged across paper; this library produces, line by line,
//! the precise bit pattern driving each physical nozzle.
//!
//! ## Quick Start
//!
//! ```
//! use image::DynamicImage;
//! use mbrush::{PrintheadConfig, image_to_mbd};
//!
//! // Load or build an 8-bit image (decoding is the caller's concern)
//! let image = DynamicImage::new_rgb8(4, 360);
//!
//! // Encode it for the shipped hardware revision
//! let mbd = image_to_mbd(&image, &PrintheadConfig::MBRUSH)?;
//!
//! // `mbd` is ready to write to a file or stream to the device
//! assert_eq!(&mbd[..6], b"MBrush");
//! # Ok::<(), mbrush::MbrushError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pipeline`] | Top-level image → MBD conversion |
//! | [`render`] | RGB→CMY inversion and error-diffusion dithering |
//! | [`protocol`] | Compositing, nozzle arrangement, packing, framing |
//! | [`printhead`] | Hardware revision parameters |
//! | [`error`] | Error types |
//!
//! ## Determinism
//!
//! The whole pipeline is a pure function of its input: dithering order,
//! neighbor weights, nozzle permutation tables and framing bytes are all
//! part of the contract, so the same image always yields a byte-identical
//! document. The device protocol is one-directional — no responses are
//! modeled.

pub mod error;
pub mod pipeline;
pub mod printhead;
pub mod protocol;
pub mod render;

// Re-exports for convenience
pub use error::MbrushError;
pub use pipeline::image_to_mbd;
pub use printhead::PrintheadConfig;
