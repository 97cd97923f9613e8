// src/main.rs
use clap::Parser;
use std::io::Write;
use ultra_profit_rs::{self, *};

/// Main entry point
///
/// # Returns
/// - `Ok(())` on successful execution
/// - `Err(ReportError)` if writing to stdout fails
///
/// # Flow
/// 1. Parses command line arguments
/// 2. Initializes logging
/// 3. Prints the report or the built-in profile
fn main() -> Result<(), ReportError> {
    let cli = Commands::parse();

    if cli.verbose {
        utils::init_verbose_logging();
    } else {
        utils::init_logging();
    }

    match cli.action() {
        cli::Action::Report => generate_report(),
        cli::Action::Profile => print_profile(),
    }
}

/// Prints the compile-time mining profile as TOML
fn print_profile() -> Result<(), ReportError> {
    let dump = config::dump_builtin()?;
    let mut out = std::io::stdout().lock();
    out.write_all(dump.as_bytes())?;
    out.flush()?;
    Ok(())
}
