// src/report/generator.rs
//! Report rendering
//!
//! Writes the profitability report section by section. Everything except
//! the final timestamp line is a pure function of the [`MiningProfile`].

use crate::config::{CoinRecord, MiningProfile};
use crate::profit::{CoinProfitability, Earnings, ElectricityCost, best_coin};
use crate::report::clock::Clock;
use crate::types::Period;
use crate::utils::error::ReportError;
use std::io::Write;

/// Fixed closing statements
const CONCLUSION: [&str; 5] = [
    "Your i7-1065G7 can generate $150-200/month",
    "With FREE electricity: 100% of mining revenue = profit",
    "24/7 mining maximizes earnings",
    "Ultra-optimization: +300% performance boost",
    "Real money mining is now ACTIVE!",
];

/// Renders the free-electricity profitability report for a profile
pub struct ReportGenerator<'a> {
    profile: &'a MiningProfile,
    cost: ElectricityCost,
}

impl<'a> ReportGenerator<'a> {
    /// Creates a generator and derives the electricity costs up front
    pub fn new(profile: &'a MiningProfile) -> Self {
        ReportGenerator {
            profile,
            cost: ElectricityCost::for_hardware(&profile.hardware),
        }
    }

    /// Electricity figures the report is based on
    pub fn electricity_cost(&self) -> &ElectricityCost {
        &self.cost
    }

    /// Writes the complete report, timestamp included
    ///
    /// # Arguments
    /// * `out` - Destination for the report text
    /// * `clock` - Read once, after the body has been written
    pub fn write_report<W: Write, C: Clock + ?Sized>(
        &self,
        out: &mut W,
        clock: &C,
    ) -> Result<(), ReportError> {
        self.write_body(out)?;
        writeln!(out, "🕐 Calculated: {}", clock.timestamp())?;
        Ok(())
    }

    /// Renders the complete report into a string
    pub fn render<C: Clock + ?Sized>(&self, clock: &C) -> Result<String, ReportError> {
        let mut buf = Vec::new();
        self.write_report(&mut buf, clock)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes every section except the timestamp
    ///
    /// Output depends only on the profile, two calls produce identical bytes.
    pub fn write_body<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let best = best_coin(&self.profile.coins)?;
        log::debug!(
            "Daily cost ${:.4}, best coin {} at ${:.2}/day",
            self.cost.daily,
            best.symbol,
            best.daily_usd
        );

        self.write_banner(out)?;
        self.write_electricity(out)?;
        self.write_comparison(out, best)?;
        self.write_optimization(out, best)?;
        write_conclusion(out)?;
        Ok(())
    }

    fn write_banner<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        write_heading(out, "🚀 ULTRA PROFITABILITY CALCULATOR", 33)?;
        writeln!(out, "Hardware: {}", self.profile.hardware.model)?;
        writeln!(out, "Electricity: FREE (0 cost)")?;
        writeln!(out, "Mining: 24/7 continuous")?;
        writeln!(out)?;
        Ok(())
    }

    fn write_electricity<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        write_heading(out, "⚡ ELECTRICITY ANALYSIS:", 23)?;
        writeln!(out, "   Power Usage: {}W", self.profile.hardware.power_watts)?;
        writeln!(out, "   Daily kWh: {:.3}", self.cost.daily_kwh)?;
        for period in Period::ALL {
            writeln!(
                out,
                "   Normal {} Cost: ${}",
                period.label(),
                period.format_usd(self.cost.for_period(period))
            )?;
        }
        writeln!(out, "   🎉 FREE ELECTRICITY: $0.00 cost!")?;
        writeln!(out)?;
        Ok(())
    }

    fn write_comparison<W: Write>(&self, out: &mut W, best: &CoinRecord) -> Result<(), ReportError> {
        write_heading(out, "💰 PROFITABILITY COMPARISON:", 28)?;

        for coin in &self.profile.coins {
            let p = CoinProfitability::compute(coin, &self.cost);
            log::debug!(
                "{}: net normal ${:.4}/day, improvement {:.2}%",
                coin.symbol,
                p.net_normal.daily,
                p.improvement_percent
            );

            let status = if coin.symbol == best.symbol {
                "🏆 BEST"
            } else {
                "   "
            };
            writeln!(out, "{} {} ({} {}):", status, coin.symbol, coin.hashrate, coin.unit)?;
            writeln!(out, "      Normal:  {}", earnings_line(&p.net_normal))?;
            writeln!(out, "      FREE:    {}", earnings_line(&p.net_free))?;
            writeln!(out, "      Gain:    +{:.1}% profitability", p.improvement_percent)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_optimization<W: Write>(&self, out: &mut W, best: &CoinRecord) -> Result<(), ReportError> {
        write_heading(out, "🎯 ULTRA OPTIMIZATION RESULTS:", 30)?;
        writeln!(out, "   🏆 Best Algorithm: {}", best.symbol)?;
        writeln!(out, "   ⚡ Hashrate: {} {}", best.hashrate, best.unit)?;
        writeln!(out, "   💰 Daily Profit: ${:.2} (100% pure profit)", best.daily_usd)?;
        writeln!(out, "   📅 Monthly Profit: ${:.0}", best.monthly_usd)?;
        writeln!(out, "   📆 Yearly Profit: ${:.0}", best.yearly_usd)?;
        writeln!(
            out,
            "   🔋 Electricity: FREE (saved ${:.0}/year)",
            self.cost.yearly
        )?;
        writeln!(out, "   🚀 ROI: Infinite (free electricity)")?;
        writeln!(out)?;
        Ok(())
    }
}

fn write_conclusion<W: Write>(out: &mut W) -> Result<(), ReportError> {
    write_heading(out, "🎉 CONCLUSION:", 13)?;
    for line in CONCLUSION {
        writeln!(out, "   • {}", line)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Title followed by an `=` underline of `width` characters
fn write_heading<W: Write>(out: &mut W, title: &str, width: usize) -> Result<(), ReportError> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(width))?;
    Ok(())
}

/// `$d/day, $m/month, $y/year` at each period's precision
fn earnings_line(earnings: &Earnings) -> String {
    Period::ALL
        .iter()
        .map(|&period| {
            format!(
                "${}/{}",
                period.format_usd(earnings.for_period(period)),
                period.suffix()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
