// src/profit/calculator.rs
use crate::config::{CoinRecord, HardwareProfile};
use crate::types::Period;
use crate::utils::error::ReportError;

/// Hours of mining per day
const HOURS_PER_DAY: f64 = 24.0;

/// Value reported as the improvement when normal net revenue is not positive
///
/// Not a percentage: it marks the ratio as undefined.
pub const IMPROVEMENT_SENTINEL: f64 = 999.0;

/// Electricity consumption and metered cost of running the rig nonstop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricityCost {
    /// Energy used per day, kWh
    pub daily_kwh: f64,
    /// Metered cost per day, USD
    pub daily: f64,
    /// Metered cost per 30 days, USD
    pub monthly: f64,
    /// Metered cost per 365 days, USD
    pub yearly: f64,
}

impl ElectricityCost {
    /// Derives consumption and cost from the rig's power draw and tariff
    pub fn for_hardware(hardware: &HardwareProfile) -> Self {
        let daily_kwh = hardware.power_watts * HOURS_PER_DAY / 1000.0;
        let daily = daily_kwh * hardware.electricity_rate_usd_per_kwh;

        ElectricityCost {
            daily_kwh,
            daily,
            monthly: daily * Period::Monthly.days(),
            yearly: daily * Period::Yearly.days(),
        }
    }

    /// Cost over the given period
    pub fn for_period(&self, period: Period) -> f64 {
        match period {
            Period::Daily => self.daily,
            Period::Monthly => self.monthly,
            Period::Yearly => self.yearly,
        }
    }
}

/// Revenue figures for one scenario, one value per [`Period`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Earnings {
    /// Per day, USD
    pub daily: f64,
    /// Per month, USD
    pub monthly: f64,
    /// Per year, USD
    pub yearly: f64,
}

impl Earnings {
    /// Gross revenue of a coin
    pub fn gross(coin: &CoinRecord) -> Self {
        Earnings {
            daily: coin.daily_usd,
            monthly: coin.monthly_usd,
            yearly: coin.yearly_usd,
        }
    }

    /// Value for the given period
    pub fn for_period(&self, period: Period) -> f64 {
        match period {
            Period::Daily => self.daily,
            Period::Monthly => self.monthly,
            Period::Yearly => self.yearly,
        }
    }
}

/// Normal vs. free-electricity comparison for one coin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinProfitability<'a> {
    /// Coin the figures belong to
    pub coin: &'a CoinRecord,
    /// Gross revenue minus metered electricity
    pub net_normal: Earnings,
    /// Gross revenue with electricity at zero cost
    pub net_free: Earnings,
    /// Relative gain of `net_free` over `net_normal` (daily), in percent,
    /// or [`IMPROVEMENT_SENTINEL`]
    pub improvement_percent: f64,
}

impl<'a> CoinProfitability<'a> {
    /// Computes both scenarios for `coin` against the given electricity cost
    pub fn compute(coin: &'a CoinRecord, cost: &ElectricityCost) -> Self {
        let gross = Earnings::gross(coin);
        let net_normal = Earnings {
            daily: gross.daily - cost.daily,
            monthly: gross.monthly - cost.monthly,
            yearly: gross.yearly - cost.yearly,
        };
        let net_free = gross;

        CoinProfitability {
            coin,
            net_normal,
            net_free,
            improvement_percent: improvement_percent(net_free.daily, net_normal.daily),
        }
    }
}

/// Relative increase of `free` over `normal`, in percent
///
/// Returns [`IMPROVEMENT_SENTINEL`] when `normal <= 0`.
pub fn improvement_percent(free: f64, normal: f64) -> f64 {
    if normal > 0.0 {
        (free - normal) / normal * 100.0
    } else {
        IMPROVEMENT_SENTINEL
    }
}

/// Picks the coin with the highest daily gross revenue
///
/// Ties go to the coin listed first.
///
/// # Returns
/// * `Ok(&CoinRecord)` - The best coin
/// * `Err(ReportError::EmptyCoinTable)` - If `coins` is empty
pub fn best_coin(coins: &[CoinRecord]) -> Result<&CoinRecord, ReportError> {
    let mut iter = coins.iter();
    let first = iter.next().ok_or(ReportError::EmptyCoinTable)?;

    Ok(iter.fold(first, |best, coin| {
        if coin.daily_usd > best.daily_usd {
            coin
        } else {
            best
        }
    }))
}
