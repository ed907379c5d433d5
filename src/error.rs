//! # Error Types
//!
//! This module defines error types used throughout the mbrush library.
//!
//! Every failure mode is a precondition violation: the encoding pipeline is
//! deterministic and pure, so a given input either always succeeds or always
//! fails with the same error. Errors are raised at the component boundary
//! closest to the violated invariant and never caught internally.

use thiserror::Error;

/// Main error type for mbrush encoding operations
#[derive(Debug, Error)]
pub enum MbrushError {
    /// Image decoding or shape error at the pipeline entry
    #[error("Image error: {0}")]
    Image(String),

    /// Channel plane does not match the declared image dimensions
    #[error("Plane size mismatch: expected {expected} samples, got {actual}")]
    PlaneSize { expected: usize, actual: usize },

    /// Working image height is incompatible with the printhead geometry
    #[error("Line length mismatch: expected {expected} samples, got {actual}")]
    LineLength { expected: usize, actual: usize },

    /// Bit buffer length is not a multiple of 8
    #[error("Bit buffer length {0} is not a multiple of 8")]
    PackWidth(usize),

    /// A buffer that must contain only 0 or 1 holds something else
    #[error("Non-binary value {value} at index {index}")]
    NonBinary { index: usize, value: u8 },
}
