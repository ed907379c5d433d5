//! # Printhead Module
//!
//! This module provides printhead-specific configuration.
//!
//! ## Modules
//!
//! - [`config`]: Printhead hardware parameters

pub mod config;

pub use config::PrintheadConfig;
