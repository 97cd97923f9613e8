// src/utils/error.rs
use std::io;
use thiserror::Error;

/// Main error type for the report generator
///
/// All calculations run over compile-time constants, so every variant
/// here is either an environmental fault or a broken invariant on data
/// handed in by a library caller.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Writing the report to its output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rendering the built-in profile as TOML failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Best-coin selection was asked to run over an empty coin table
    #[error("Coin table is empty, no best coin can be selected")]
    EmptyCoinTable,
}
