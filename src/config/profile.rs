// src/config/profile.rs
use crate::utils::error::ReportError;
use serde::Serialize;

/// Mining rig the report is written for
///
/// Only the power draw and the tariff feed into calculations, the model
/// name is printed in the banner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HardwareProfile {
    /// Marketing name of the CPU
    pub model: &'static str,

    /// Power draw under mining load, in watts
    pub power_watts: f64,

    /// Metered electricity tariff, USD per kWh
    pub electricity_rate_usd_per_kwh: f64,
}

/// Estimated mining income for one coin on the profiled hardware
///
/// Revenue figures are estimates baked into the table, they are not
/// derived from `hashrate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoinRecord {
    /// Ticker symbol, unique within a table
    pub symbol: &'static str,

    /// Hashrate magnitude, in `unit`
    pub hashrate: f64,

    /// Hashrate unit label ("MH/s", "KH/s", ...)
    pub unit: &'static str,

    /// Gross revenue per day, USD
    pub daily_usd: f64,

    /// Gross revenue per month, USD
    pub monthly_usd: f64,

    /// Gross revenue per year, USD
    pub yearly_usd: f64,
}

/// Hardware the built-in report describes
pub const HARDWARE: HardwareProfile = HardwareProfile {
    model: "Intel Core i7-1065G7",
    power_watts: 35.0,
    electricity_rate_usd_per_kwh: 0.12,
};

/// Built-in coin table, in report order
pub const COINS: [CoinRecord; 4] = [
    CoinRecord {
        symbol: "ERG",
        hashrate: 35.0,
        unit: "MH/s",
        daily_usd: 6.50,
        monthly_usd: 195.0,
        yearly_usd: 2372.0,
    },
    CoinRecord {
        symbol: "CFX",
        hashrate: 25.0,
        unit: "MH/s",
        daily_usd: 4.20,
        monthly_usd: 126.0,
        yearly_usd: 1533.0,
    },
    CoinRecord {
        symbol: "XMR",
        hashrate: 3.0,
        unit: "KH/s",
        daily_usd: 3.80,
        monthly_usd: 114.0,
        yearly_usd: 1387.0,
    },
    CoinRecord {
        symbol: "RVN",
        hashrate: 12.0,
        unit: "MH/s",
        daily_usd: 2.10,
        monthly_usd: 63.0,
        yearly_usd: 766.0,
    },
];

/// Everything the report is computed from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiningProfile {
    /// Rig power draw and tariff
    pub hardware: HardwareProfile,

    /// Coins to compare, in display order
    pub coins: Vec<CoinRecord>,
}

impl MiningProfile {
    /// The compile-time profile: [`HARDWARE`] and [`COINS`]
    pub fn builtin() -> Self {
        MiningProfile {
            hardware: HARDWARE,
            coins: COINS.to_vec(),
        }
    }

    /// Renders the profile as TOML
    ///
    /// # Returns
    /// * `Ok(String)` - `[hardware]` table followed by one `[[coins]]` entry per coin
    /// * `Err(ReportError)` - If serialization fails
    pub fn to_toml(&self) -> Result<String, ReportError> {
        let mut out = String::new();
        out.push_str("# Built-in mining profile (compile-time constants)\n\n");
        out.push_str(&toml::to_string(self)?);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_order_is_display_order() {
        let symbols: Vec<&str> = MiningProfile::builtin()
            .coins
            .iter()
            .map(|c| c.symbol)
            .collect();
        assert_eq!(symbols, vec!["ERG", "CFX", "XMR", "RVN"]);
    }

    #[test]
    fn symbols_are_unique() {
        for (i, a) in COINS.iter().enumerate() {
            for b in &COINS[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn toml_dump_contains_every_coin() {
        let dump = MiningProfile::builtin().to_toml().unwrap();
        assert!(dump.contains("[hardware]"));
        assert!(dump.contains("model = \"Intel Core i7-1065G7\""));
        assert!(dump.contains("power_watts = 35.0"));
        assert_eq!(dump.matches("[[coins]]").count(), 4);
        for coin in &COINS {
            assert!(dump.contains(&format!("symbol = \"{}\"", coin.symbol)));
        }
    }
}
