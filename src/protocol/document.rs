//! # MBD Stream Framer
//!
//! Assembles packed line records into the complete byte stream the MBrush
//! device consumes.
//!
//! ## Wire Format
//!
//! ```text
//! offset 0..6   : "MBrush"                       (ASCII magic)
//! offset 6..10  : 00 00 00 02                    (format marker / version 2)
//! offset 10..16 : 00 00 00 00 00 00              (reserved)
//! repeat for each line i in [0, W + 64):
//!   00 87                                        (record delimiter)
//!   <270-byte packed line record>
//! ```
//!
//! Total size = `16 + (W + 64) * 272` bytes. The header itself is not
//! delimiter-prefixed; the delimiter joins the header to the first record
//! and every record to the next.
//!
//! The protocol is one-directional — bytes out, no acknowledgment — so this
//! module produces a single blob and leaves transport to the caller.

use rayon::prelude::*;

use super::compose::compose_line;
use super::nozzles::arrange_line;
use super::pack::{RECORD_BYTES, pack_line};
use crate::error::MbrushError;
use crate::printhead::PrintheadConfig;
use crate::render::dither::CmyBitmap;

/// Fixed 16-byte document header: magic, format version 2, reserved fields.
pub const HEADER: [u8; 16] = [
    b'M', b'B', b'r', b'u', b's', b'h', 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Two-byte delimiter preceding every line record.
pub const RECORD_DELIMITER: [u8; 2] = [0x00, 0x87];

/// Encode the 270-byte record for a single head step.
///
/// Compose the staggered color columns, remap onto the nozzle layout, pack.
/// Line indices run over `[0, width + 2 * color_interval)`; out-of-range
/// color columns contribute blank data (the ramp lines).
pub fn encode_line(
    bitmap: &CmyBitmap,
    index: usize,
    config: &PrintheadConfig,
) -> Result<Vec<u8>, MbrushError> {
    let composite = compose_line(bitmap, index, config)?;
    let arranged = arrange_line(&composite);
    let record = pack_line(&arranged);
    debug_assert_eq!(record.len(), RECORD_BYTES);
    Ok(record)
}

/// Encode a dithered CMY bitmap into a complete MBD document.
///
/// Line records are independent, so they are encoded in parallel; the
/// indexed iterator keeps them in head-travel order, making the output
/// byte-identical to a sequential encode.
///
/// ## Example
///
/// ```
/// use mbrush::printhead::PrintheadConfig;
/// use mbrush::protocol::document::{self, HEADER};
/// use mbrush::render::CmyBitmap;
///
/// let planes = [vec![0u8; 360], vec![0u8; 360], vec![0u8; 360]];
/// let bitmap = CmyBitmap::from_planes(planes, 1, 360).unwrap();
///
/// let mbd = document::encode_document(&bitmap, &PrintheadConfig::MBRUSH).unwrap();
/// assert_eq!(&mbd[..16], &HEADER);
/// assert_eq!(mbd.len(), 16 + 65 * 272);
/// ```
pub fn encode_document(
    bitmap: &CmyBitmap,
    config: &PrintheadConfig,
) -> Result<Vec<u8>, MbrushError> {
    let line_count = config.line_count(bitmap.width());

    let records: Vec<Vec<u8>> = (0..line_count)
        .into_par_iter()
        .map(|index| encode_line(bitmap, index, config))
        .collect::<Result<_, _>>()?;

    let mut document =
        Vec::with_capacity(HEADER.len() + line_count * (RECORD_DELIMITER.len() + RECORD_BYTES));
    document.extend_from_slice(&HEADER);
    for record in &records {
        document.extend_from_slice(&RECORD_DELIMITER);
        document.extend_from_slice(record);
    }
    Ok(document)
}

// ============================================================================
// TESTS
// ============================================================================
