// src/utils/mod.rs
//! Utilities module for common functionality
//!
//! Error handling and logging infrastructure shared by the library and
//! the binary.

/// Error types
///
/// Contains the [`ReportError`] enum which defines every failure the
/// report generator can surface.
pub mod error;

/// Logging configuration
///
/// Provides logging initialization with stderr output so that the
/// report on stdout stays clean.
pub mod logging;

// Re-export for easier access
pub use error::ReportError;
pub use logging::{init_logging, init_verbose_logging};
