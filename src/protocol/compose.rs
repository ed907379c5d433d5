//! # Channel Offset Compositor
//!
//! The three color nozzle rows are mounted at different positions along the
//! direction of head travel, so at one physical head step they must fire
//! *different source columns*. This module gathers, for each output line
//! index, the correct column slice of each color plane into one composite
//! buffer.
//!
//! ## Composite Buffer Layout
//!
//! 180 sub-row samples × 12 slots, every element 0 or 1:
//!
//! ```text
//! slot:   0    1    2    3    4    5    6 .. 11
//!       ┌────┬────┬────┬────┬────┬────┬─────────┐
//!       │ Y0 │ Y1 │ M0 │ M1 │ C0 │ C1 │ unused  │
//!       └────┴────┴────┴────┴────┴────┴─────────┘
//! ```
//!
//! Slots 6–11 address the second physical half of the nozzle bank, which the
//! shipped device path never drives; they stay zero.
//!
//! ## Column Sampling
//!
//! Each in-range color column is read bottom-to-top and de-interlaced into
//! two half-resolution sub-rows. For yellow and cyan the bottom-start
//! samples (rows 359, 357, 355, …) feed the sub-0 slot and the even samples
//! (rows 358, 356, …) the sub-1 slot. Magenta is wired mirror-image to the
//! other two: its bottom-start samples land in M1 (slot 3) and the even
//! samples in M0 (slot 2).
//!
//! ## Ramp Lines
//!
//! For line `i` the cyan source column is `i`, magenta's is
//! `i - color_interval` and yellow's is `i - 2 * color_interval`. A column
//! index outside `[0, width)` contributes no ink, which yields the partial
//! ramp-in/ramp-out lines at both ends of the document.

use crate::error::MbrushError;
use crate::printhead::PrintheadConfig;
use crate::render::dither::{Channel, CmyBitmap};

/// Logical slots per composite line (6 colors × 2 sub-rows).
pub const SLOT_COUNT: usize = 12;

/// Sub-row samples per slot (half the 360-dot working line).
pub const SUB_ROWS: usize = 180;

/// One composite line: `SUB_ROWS` samples across `SLOT_COUNT` slots.
pub type CompositeLine = [[u8; SLOT_COUNT]; SUB_ROWS];

impl Channel {
    /// Composite-buffer columns for this channel's two sub-rows, in
    /// (bottom-start, even) sampling order.
    #[inline]
    pub(crate) fn slot_columns(self) -> (usize, usize) {
        match self {
            Self::Yellow => (0, 1),
            Self::Magenta => (3, 2),
            Self::Cyan => (4, 5),
        }
    }
}

/// Build the composite buffer for output line `index`.
///
/// ## Errors
///
/// [`MbrushError::LineLength`] if the bitmap height does not match the
/// printhead's working line width (the nozzle geometry requires exactly
/// `2 * SUB_ROWS` rows).
pub fn compose_line(
    bitmap: &CmyBitmap,
    index: usize,
    config: &PrintheadConfig,
) -> Result<CompositeLine, MbrushError> {
    if bitmap.height() != config.line_width as usize || config.sub_rows() != SUB_ROWS {
        return Err(MbrushError::LineLength {
            expected: 2 * SUB_ROWS,
            actual: bitmap.height(),
        });
    }

    let height = bitmap.height();
    let interval = config.color_interval as usize;
    let mut line = [[0u8; SLOT_COUNT]; SUB_ROWS];

    for channel in Channel::ALL {
        let Some(col) = index.checked_sub(channel.stagger() * interval) else {
            continue; // nozzle row has not reached the image yet
        };
        if col >= bitmap.width() {
            continue; // nozzle row has already left the image
        }

        let (slot_odd, slot_even) = channel.slot_columns();
        for s in 0..SUB_ROWS {
            // Bottom-to-top: the lowest image row maps to the first nozzle.
            line[s][slot_odd] = bitmap.sample(channel, height - 1 - 2 * s, col);
            line[s][slot_even] = bitmap.sample(channel, height - 2 - 2 * s, col);
        }
    }

    debug_assert!(line.iter().flatten().all(|&v| v <= 1));
    Ok(line)
}

// ============================================================================
// TESTS
// ============================================================================
