// src/cli/mod.rs
//! Command-line interface definitions

/// Argument parser built with clap's derive API
pub mod commands;

pub use commands::{Action, Commands};
