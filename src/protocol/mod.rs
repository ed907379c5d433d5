//! # MBD Wire Format
//!
//! This module builds the binary command stream consumed by the MBrush
//! printhead, one stage per submodule, in data-flow order:
//!
//! - [`compose`]: gather staggered C/M/Y column slices into a per-line
//!   composite buffer
//! - [`nozzles`]: remap logical slots onto the physical nozzle firing layout
//! - [`pack`]: serialize firing bits into bytes, LSB-first
//! - [`document`]: frame packed line records with the MBD header and
//!   delimiters
//!
//! ## Usage Example
//!
//! ```
//! use mbrush::printhead::PrintheadConfig;
//! use mbrush::protocol::document;
//! use mbrush::render::CmyBitmap;
//!
//! let config = PrintheadConfig::MBRUSH;
//!
//! // A single all-ink column at working resolution
//! let plane = vec![1u8; 360];
//! let bitmap = CmyBitmap::from_planes(
//!     [plane.clone(), plane.clone(), plane],
//!     1,
//!     360,
//! ).unwrap();
//!
//! let mbd = document::encode_document(&bitmap, &config).unwrap();
//! assert_eq!(mbd.len(), 16 + 65 * 272);
//! ```

pub mod compose;
pub mod document;
pub mod nozzles;
pub mod pack;
