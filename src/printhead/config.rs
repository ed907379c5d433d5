//! # Printhead Configuration
//!
//! This module defines the per-revision parameters of the MBrush printhead.
//!
//! Two values vary between hardware revisions and are treated as
//! configuration rather than constants baked into the codec:
//!
//! | Parameter | MBrush value | Meaning |
//! |-----------|--------------|---------|
//! | `line_width` | 360 | working vertical resolution (dots per head step) |
//! | `color_interval` | 32 | along-travel offset between color nozzle rows, in lines |
//!
//! The nozzle wiring geometry (cluster size, group count, coarse/fine
//! permutation tables) is *not* configuration — it is fixed by the physical
//! printhead and lives with the arrangement tables in
//! [`crate::protocol::nozzles`].
//!
//! ## Usage
//!
//! ```
//! use mbrush::printhead::PrintheadConfig;
//!
//! let config = PrintheadConfig::MBRUSH;
//! assert_eq!(config.line_width, 360);
//! assert_eq!(config.line_count(100), 164); // 100 + 2 * 32 ramp lines
//! ```

/// # Printhead Configuration
///
/// Hardware parameters for one revision of the MBrush printhead.
///
/// ## Physical Properties
///
/// - **line_width**: dots along the nozzle bank per head step; the working
///   image is resized so its height equals this value
/// - **color_interval**: physical offset, in head steps, between the cyan,
///   magenta and yellow nozzle rows along the direction of travel
///
/// The three color rows are mounted at different positions, so at a given
/// head step they fire different source columns. This staggering produces
/// `2 * color_interval` partial ramp-in/ramp-out lines at the start and end
/// of every document.
#[derive(Debug, Clone, Copy)]
pub struct PrintheadConfig {
    /// Printhead model name
    pub name: &'static str,

    /// Working vertical resolution in dots
    pub line_width: u32,

    /// Offset between color nozzle rows, in lines
    pub color_interval: u32,
}

impl PrintheadConfig {
    /// # MBrush Handheld Printer Configuration
    ///
    /// The shipped hardware revision: 360-dot working lines, color rows
    /// spaced 32 lines apart.
    pub const MBRUSH: Self = Self {
        name: "MBrush",
        line_width: 360,
        color_interval: 32,
    };

    /// Samples per color sub-row (half the working resolution).
    ///
    /// Each color's nozzle row has half the vertical pitch of the target
    /// resolution, so the 360 dots of a line de-interlace into two 180-dot
    /// sub-rows.
    #[inline]
    pub fn sub_rows(&self) -> usize {
        self.line_width as usize / 2
    }

    /// Total line records emitted for a dithered image of width `width`.
    ///
    /// The first and last `color_interval` lines are partial: only the
    /// colors whose staggered source column is already (or still) inside
    /// the image contribute ink.
    ///
    /// ## Example
    ///
    /// ```
    /// use mbrush::printhead::PrintheadConfig;
    ///
    /// let config = PrintheadConfig::MBRUSH;
    /// assert_eq!(config.line_count(1), 65);
    /// ```
    #[inline]
    pub fn line_count(&self, width: usize) -> usize {
        width + 2 * self.color_interval as usize
    }
}

impl Default for PrintheadConfig {
    fn default() -> Self {
        Self::MBRUSH
    }
}

// ============================================================================
// TESTS
// ============================================================================
