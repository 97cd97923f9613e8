//! Ultra Profit - free-electricity CPU mining profitability report
//!
//! This crate prints an illustrative comparison of mining revenue on a
//! single CPU with metered electricity versus free electricity:
//! - Electricity consumption and cost per day, month and year
//! - Net revenue per coin under both scenarios
//! - Best-coin selection and a summary of the gains
//!
//! All inputs are compile-time constants, see [`config`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Profitability arithmetic
pub mod profit;

/// Report rendering
pub mod report;

/// Utility functions and error handling
pub mod utils;

/// Command-line interface definitions
pub mod cli;

/// Built-in mining profile
pub mod config;

/// Shared type definitions
pub mod types;

// Core exports
pub use cli::Commands;
pub use config::{CoinRecord, HardwareProfile, MiningProfile};
pub use profit::{CoinProfitability, ElectricityCost, best_coin};
pub use report::{Clock, ReportGenerator, SystemClock, generate_report};
pub use types::Period;
pub use utils::{ReportError, init_logging};
