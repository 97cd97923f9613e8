// src/types.rs
/// Accounting period a revenue or cost figure covers
///
/// Each period carries its own day count and the number of decimal
/// places its dollar figures are printed with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Period {
    /// One day of continuous mining
    Daily,

    /// Thirty days
    Monthly,

    /// 365 days
    Yearly,
}

impl Period {
    /// All periods, shortest first
    pub const ALL: [Period; 3] = [Period::Daily, Period::Monthly, Period::Yearly];

    /// Number of days in the period
    pub fn days(self) -> f64 {
        match self {
            Period::Daily => 1.0,
            Period::Monthly => 30.0,
            Period::Yearly => 365.0,
        }
    }

    /// Decimal places used when printing a dollar amount for this period
    ///
    /// Daily figures are usually below one dollar for electricity, so
    /// they get the most precision.
    pub fn decimals(self) -> usize {
        match self {
            Period::Daily => 3,
            Period::Monthly => 2,
            Period::Yearly => 0,
        }
    }

    /// Formats a dollar amount at this period's precision, without the `$`
    pub fn format_usd(self, amount: f64) -> String {
        format!("{:.*}", self.decimals(), amount)
    }

    /// Capitalized name, as used in the electricity section
    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }

    /// Unit suffix used in per-coin lines (`/day`, `/month`, `/year`)
    pub fn suffix(self) -> &'static str {
        match self {
            Period::Daily => "day",
            Period::Monthly => "month",
            Period::Yearly => "year",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_follows_period() {
        assert_eq!(Period::Daily.format_usd(0.1008), "0.101");
        assert_eq!(Period::Monthly.format_usd(3.024), "3.02");
        assert_eq!(Period::Yearly.format_usd(36.792), "37");
    }

    #[test]
    fn day_counts() {
        let days: Vec<f64> = Period::ALL.iter().map(|p| p.days()).collect();
        assert_eq!(days, vec![1.0, 30.0, 365.0]);
    }
}
