// src/config/mod.rs
//! Built-in mining profile
//!
//! The hardware, tariff and coin table are compile-time constants. There
//! is no loader: the profile can be inspected (dumped as
//! TOML) but not replaced.

/// Profile types and the constant tables
///
/// Contains [`HardwareProfile`], [`CoinRecord`] and the [`MiningProfile`]
/// that bundles them.
pub mod profile;

// Re-export key items for easy access
pub use profile::{COINS, CoinRecord, HARDWARE, HardwareProfile, MiningProfile};

use crate::utils::error::ReportError;

/// Returns the compile-time mining profile
pub fn builtin() -> MiningProfile {
    MiningProfile::builtin()
}

/// Renders the compile-time profile as a commented TOML document
pub fn dump_builtin() -> Result<String, ReportError> {
    MiningProfile::builtin().to_toml()
}
