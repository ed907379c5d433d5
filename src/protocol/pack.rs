//! # Bit Packer
//!
//! Serializes binary firing patterns into raw bytes.
//!
//! ## Bit Order
//!
//! The MBrush shift registers clock the *first* nozzle of each group of
//! eight into the least significant bit:
//!
//! - Bit 0 (LSB) = first sample of the chunk
//! - Bit 7 (MSB) = eighth sample
//! - 1 = fire nozzle, 0 = no ink
//!
//! ```text
//! samples [1,0,0,0,0,0,0,0] -> byte 0x01
//! samples [0,0,0,0,0,0,0,1] -> byte 0x80
//! ```
//!
//! This is the opposite of the MSB-first packing most raster printer
//! protocols use.

use super::nozzles::{ARRANGED_COLS, ARRANGED_ROWS, ArrangedLine};
use crate::error::MbrushError;

/// Packed size of one arranged line (18 × 120 bits).
pub const RECORD_BYTES: usize = ARRANGED_ROWS * ARRANGED_COLS / 8;

/// Pack a flat {0,1} buffer into bytes, LSB-first within each byte.
///
/// ## Example
///
/// ```
/// use mbrush::protocol::pack::pack_bits;
///
/// assert_eq!(pack_bits(&[1, 0, 0, 0, 0, 0, 0, 0]).unwrap(), vec![0x01]);
/// assert_eq!(pack_bits(&[0, 0, 0, 0, 0, 0, 0, 1]).unwrap(), vec![0x80]);
/// assert_eq!(pack_bits(&[1; 8]).unwrap(), vec![0xFF]);
/// ```
///
/// ## Errors
///
/// - [`MbrushError::PackWidth`] if the length is not a multiple of 8
/// - [`MbrushError::NonBinary`] if any sample is outside {0, 1}
pub fn pack_bits(bits: &[u8]) -> Result<Vec<u8>, MbrushError> {
    if bits.len() % 8 != 0 {
        return Err(MbrushError::PackWidth(bits.len()));
    }
    if let Some(index) = bits.iter().position(|&b| b > 1) {
        return Err(MbrushError::NonBinary {
            index,
            value: bits[index],
        });
    }

    let bytes = bits
        .chunks_exact(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (k, &bit)| byte | (bit << k))
        })
        .collect();
    Ok(bytes)
}

/// Pack one arranged line into its 270-byte record, row-major.
pub fn pack_line(line: &ArrangedLine) -> Vec<u8> {
    debug_assert!(line.iter().flatten().all(|&v| v <= 1));

    let mut record = Vec::with_capacity(RECORD_BYTES);
    for row in line {
        for chunk in row.chunks_exact(8) {
            let byte = chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (k, &bit)| byte | (bit << k));
            record.push(byte);
        }
    }

    debug_assert_eq!(record.len(), RECORD_BYTES);
    record
}

// ============================================================================
// TESTS
// ============================================================================
