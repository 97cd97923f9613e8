// src/profit/mod.rs
//! Profitability calculations
//!
//! Pure arithmetic over the mining profile:
//! - Electricity consumption and metered cost per period
//! - Net revenue with metered vs. free electricity
//! - Improvement percentage and best-coin selection
//!
//! Nothing here performs I/O, so every figure in the report can be
//! checked without rendering it.

/// Calculator implementation
pub mod calculator;

// Re-export main components
pub use calculator::{
    CoinProfitability, Earnings, ElectricityCost, IMPROVEMENT_SENTINEL, best_coin,
    improvement_percent,
};
