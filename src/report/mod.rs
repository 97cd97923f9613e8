// src/report/mod.rs
//! Report generation
//!
//! Turns the mining profile into the human-readable profitability
//! report. The wall clock is only consulted through the [`Clock`] trait,
//! so the body can be rendered and compared without touching time.

/// Timestamp source for the closing line
pub mod clock;

/// Section-by-section report writer
pub mod generator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use generator::ReportGenerator;

use crate::config;
use crate::utils::error::ReportError;
use std::io::{self, Write};

/// Prints the report for the built-in profile to standard output
///
/// # Returns
/// - `Ok(())` once the last line has been flushed
/// - `Err(ReportError)` if stdout could not be written
pub fn generate_report() -> Result<(), ReportError> {
    let profile = config::builtin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    log::info!(
        "Generating report for {} ({} coins)",
        profile.hardware.model,
        profile.coins.len()
    );
    ReportGenerator::new(&profile).write_report(&mut out, &SystemClock)?;
    out.flush()?;
    Ok(())
}
