//! # Nozzle Arrangement Mapper
//!
//! The printhead does not fire nozzles in image order. Within each color
//! sub-row the 180 nozzles are wired as 20 clusters of 9, and the firing
//! order inside a cluster is a fixed permutation determined by the physical
//! pitch of the nozzle plate. Across clusters, a slot's 20 groups interleave
//! with neighboring slots at fixed column positions.
//!
//! This module remaps one composite line (180×12 logical samples) into the
//! 18×120 physical firing pattern for one head step.
//!
//! ## Output Layout
//!
//! ```text
//!         0                    59 60                  119  (column)
//!        ┌──────────────────────┬──────────────────────┐
//!  0..9  │ slots 0–5, groups 0–9│ slots 0–5, groups 10+│
//!        ├──────────────────────┼──────────────────────┤
//!  9..18 │ slots 6–11           │ slots 6–11           │
//!        └──────────────────────┴──────────────────────┘
//! ```
//!
//! Group `g` of slot `s` occupies column
//! `COARSE_STEP[g % 10] + SLOT_BASE[s % 6]` (+60 for groups 10–19), rows
//! 0–8 for slots 0–5 and rows 9–17 for slots 6–11. Within the group, sample
//! `k` lands on row `FINE[s][k]` of that span.
//!
//! ## Calibration Data
//!
//! The permutation tables encode immutable hardware geometry. They are
//! ported verbatim from the vendor calibration and must never be recomputed
//! or "simplified" — every entry is load-bearing for print alignment.

use super::compose::{CompositeLine, SLOT_COUNT};

/// Nozzles per physical cluster.
pub const CLUSTER_SIZE: usize = 9;

/// Clusters per slot (20 × 9 = 180 sub-row samples).
pub const GROUP_COUNT: usize = 20;

/// Rows in the arranged firing pattern (two 9-row halves).
pub const ARRANGED_ROWS: usize = 18;

/// Columns in the arranged firing pattern.
pub const ARRANGED_COLS: usize = 120;

/// One arranged line: the physical firing pattern for a single head step.
pub type ArrangedLine = [[u8; ARRANGED_COLS]; ARRANGED_ROWS];

/// Column interleave of a slot's first ten groups.
pub const COARSE_STEP: [usize; 10] = [0, 10, 1, 11, 2, 12, 3, 13, 4, 14];

/// Base column per slot (Y0, Y1, M0, M1, C0, C1; same for both halves).
pub const SLOT_BASE: [usize; 6] = [0, 5, 20, 25, 40, 45];

/// Within-cluster firing order per slot: sample `k` fires on row
/// `FINE[slot][k]`. Each row is `(0..9) * 4 + n (mod 9)` for some phase `n`.
pub const FINE: [[usize; CLUSTER_SIZE]; SLOT_COUNT] = [
    [1, 5, 0, 4, 8, 3, 7, 2, 6],
    [8, 3, 7, 2, 6, 1, 5, 0, 4],
    [8, 3, 7, 2, 6, 1, 5, 0, 4],
    [1, 5, 0, 4, 8, 3, 7, 2, 6],
    [1, 5, 0, 4, 8, 3, 7, 2, 6],
    [8, 3, 7, 2, 6, 1, 5, 0, 4],
    [6, 1, 5, 0, 4, 8, 3, 7, 2],
    [8, 3, 7, 2, 6, 1, 5, 0, 4],
    [8, 3, 7, 2, 6, 1, 5, 0, 4],
    [6, 1, 5, 0, 4, 8, 3, 7, 2],
    [6, 1, 5, 0, 4, 8, 3, 7, 2],
    [8, 3, 7, 2, 6, 1, 5, 0, 4],
];

/// Remap one composite line onto the physical nozzle layout.
///
/// ## Example
///
/// ```
/// use mbrush::protocol::{compose, nozzles};
///
/// // A single sample in slot 4 (C0), group 0, cluster position 0
/// let mut line = [[0u8; compose::SLOT_COUNT]; compose::SUB_ROWS];
/// line[0][4] = 1;
///
/// let arranged = nozzles::arrange_line(&line);
///
/// // FINE[4][0] = 1, column = COARSE_STEP[0] + SLOT_BASE[4] = 40
/// assert_eq!(arranged[1][40], 1);
/// ```
pub fn arrange_line(line: &CompositeLine) -> ArrangedLine {
    debug_assert!(line.iter().flatten().all(|&v| v <= 1));

    let mut buf = [[0u8; ARRANGED_COLS]; ARRANGED_ROWS];

    for slot in 0..SLOT_COUNT {
        let row_base = if slot < 6 { 0 } else { CLUSTER_SIZE };
        for group in 0..GROUP_COUNT {
            let mut col = COARSE_STEP[group % 10] + SLOT_BASE[slot % 6];
            if group >= 10 {
                col += ARRANGED_COLS / 2;
            }
            for k in 0..CLUSTER_SIZE {
                let sample = line[group * CLUSTER_SIZE + k][slot];
                buf[row_base + FINE[slot][k]][col] = sample;
            }
        }
    }

    debug_assert!(buf.iter().flatten().all(|&v| v <= 1));
    buf
}

// ============================================================================
// TESTS
// ============================================================================
