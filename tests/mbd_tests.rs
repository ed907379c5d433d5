//! # MBD Document Tests
//!
//! End-to-end tests for the image → MBD pipeline. These pin down the parts
//! of the wire format a device would notice: header bytes, record count,
//! record size, delimiter placement, and the exact firing pattern for
//! known single-column inputs.

use image::{DynamicImage, Rgb, RgbImage};
use mbrush::printhead::PrintheadConfig;
use mbrush::protocol::document::{HEADER, RECORD_DELIMITER};
use mbrush::{MbrushError, image_to_mbd};
use pretty_assertions::assert_eq;

/// Packed record size for one head step.
const RECORD_BYTES: usize = 270;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a uniform image of the given size and color.
fn encode_solid(width: u32, height: u32, color: Rgb<u8>) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, color));
    image_to_mbd(&image, &PrintheadConfig::MBRUSH).expect("encoding failed")
}

/// Split a document into its line records, checking framing as we go.
fn split_records(mbd: &[u8]) -> Vec<&[u8]> {
    assert_eq!(&mbd[..16], &HEADER, "bad header");
    assert_eq!((mbd.len() - 16) % (2 + RECORD_BYTES), 0, "ragged tail");

    mbd[16..]
        .chunks_exact(2 + RECORD_BYTES)
        .map(|chunk| {
            assert_eq!(&chunk[..2], &RECORD_DELIMITER, "bad delimiter");
            &chunk[2..]
        })
        .collect()
}

/// The packed row emitted while a single solid color with slot bases
/// `(a, b)` is firing: twenty coarse columns per slot, mirrored at +60.
fn solid_color_row(base_a: usize, base_b: usize) -> [u8; 15] {
    let mut bits = [0u8; 120];
    for base in [base_a, base_b] {
        for step in [0, 10, 1, 11, 2, 12, 3, 13, 4, 14] {
            bits[base + step] = 1;
            bits[base + step + 60] = 1;
        }
    }
    let mut row = [0u8; 15];
    for (i, chunk) in bits.chunks_exact(8).enumerate() {
        row[i] = chunk
            .iter()
            .enumerate()
            .fold(0, |byte, (k, &bit)| byte | (bit << k));
    }
    row
}

// ============================================================================
// DOCUMENT STRUCTURE
// ============================================================================

#[test]
fn black_column_produces_65_records() {
    let mbd = encode_solid(1, 360, Rgb([0, 0, 0]));
    assert_eq!(mbd.len(), 16 + 65 * 272);
    assert_eq!(split_records(&mbd).len(), 65);
}

#[test]
fn record_count_tracks_image_width() {
    let mbd = encode_solid(10, 360, Rgb([0, 0, 0]));
    assert_eq!(split_records(&mbd).len(), 10 + 64);
}

#[test]
fn every_record_is_270_bytes() {
    let mbd = encode_solid(3, 360, Rgb([40, 160, 220]));
    for record in split_records(&mbd) {
        assert_eq!(record.len(), RECORD_BYTES);
    }
}

#[test]
fn header_is_fixed() {
    assert_eq!(&HEADER[..], b"MBrush\x00\x00\x00\x02\x00\x00\x00\x00\x00\x00");
    let mbd = encode_solid(1, 360, Rgb([255, 0, 0]));
    assert_eq!(&mbd[..16], &HEADER);
}

#[test]
fn white_image_is_all_blank_records() {
    let mbd = encode_solid(1, 360, Rgb([255, 255, 255]));
    let records = split_records(&mbd);
    assert_eq!(records.len(), 65);
    for record in records {
        assert!(record.iter().all(|&b| b == 0));
    }
}

// ============================================================================
// COLOR STAGGER
// ============================================================================

#[test]
fn black_column_inks_exactly_three_lines() {
    // One source column, all three inks: cyan fires at step 0, magenta 32
    // lines later, yellow 64 lines later. Everything else is blank ramp.
    let mbd = encode_solid(1, 360, Rgb([0, 0, 0]));
    let records = split_records(&mbd);

    for (index, record) in records.iter().enumerate() {
        let inked = record.iter().any(|&b| b != 0);
        assert_eq!(inked, matches!(index, 0 | 32 | 64), "record {}", index);
    }
}

#[test]
fn cyan_record_matches_known_firing_pattern() {
    // Solid cyan ink fills slots C0/C1 (bases 40 and 45): columns 40–59
    // and 100–119 of the first nozzle half, every row.
    let mbd = encode_solid(1, 360, Rgb([0, 255, 255]));
    let records = split_records(&mbd);

    let row = solid_color_row(40, 45);
    let mut expected = vec![0u8; RECORD_BYTES];
    for r in 0..9 {
        expected[r * 15..(r + 1) * 15].copy_from_slice(&row);
    }
    assert_eq!(records[0], &expected[..]);

    // The only other cyan source column does not exist; all later records blank.
    assert!(records[1..].iter().all(|r| r.iter().all(|&b| b == 0)));
}

#[test]
fn magenta_and_yellow_records_land_on_their_slots() {
    let mbd = encode_solid(1, 360, Rgb([0, 0, 0]));
    let records = split_records(&mbd);

    let cyan_row = solid_color_row(40, 45);
    let magenta_row = solid_color_row(20, 25);
    let yellow_row = solid_color_row(0, 5);

    assert_eq!(&records[0][..15], &cyan_row);
    assert_eq!(&records[32][..15], &magenta_row);
    assert_eq!(&records[64][..15], &yellow_row);

    // Second nozzle half (rows 9–17) never fires on the shipped path.
    for index in [0, 32, 64] {
        assert!(records[index][9 * 15..].iter().all(|&b| b == 0));
    }
}

// ============================================================================
// PIPELINE ENTRY
// ============================================================================

#[test]
fn oversized_image_is_resized_to_working_height() {
    // 2x720 halves to 1x360: same 65-record document as a native column.
    let mbd = encode_solid(2, 720, Rgb([0, 0, 0]));
    assert_eq!(split_records(&mbd).len(), 65);
}

#[test]
fn grayscale_input_is_promoted_to_rgb() {
    let image = DynamicImage::new_luma8(1, 360); // zero-filled = black
    let mbd = image_to_mbd(&image, &PrintheadConfig::MBRUSH).unwrap();
    let records = split_records(&mbd);
    // Black drives all three channels: ink at steps 0, 32 and 64.
    for index in [0, 32, 64] {
        assert!(records[index].iter().any(|&b| b != 0));
    }
}

#[test]
fn encoding_is_deterministic() {
    let mut image = RgbImage::new(8, 360);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let v = ((x * 37 + y * 11) % 256) as u8;
        *pixel = Rgb([v, v.wrapping_mul(3), 255 - v]);
    }
    let image = DynamicImage::ImageRgb8(image);

    let first = image_to_mbd(&image, &PrintheadConfig::MBRUSH).unwrap();
    let second = image_to_mbd(&image, &PrintheadConfig::MBRUSH).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_image_fails_fast() {
    let image = DynamicImage::new_rgb8(0, 0);
    let err = image_to_mbd(&image, &PrintheadConfig::MBRUSH).unwrap_err();
    assert!(matches!(err, MbrushError::Image(_)));
}
