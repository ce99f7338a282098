//! Greedy change-making and progressive tariffs.
//!
//! Denomination tables and tariff tiers parameterize the computation;
//! callers supply them, and the conventional Vietnamese tables are
//! available as defaults.

use crate::ArithError;

/// The conventional VND note denominations, descending.
#[must_use]
pub fn vnd_denominations() -> &'static [u64] {
    &[
        500_000, 200_000, 100_000, 50_000, 20_000, 10_000, 5_000, 2_000, 1_000, 500, 200, 100,
    ]
}

/// Breaks `amount` into (denomination, count) pairs by the greedy rule.
///
/// Denominations are consumed in the given order, so a descending table
/// yields the usual fewest-notes breakdown. Zero entries are skipped.
/// Any residue smaller than every denomination is reported as unit
/// coins `(1, residue)`.
#[must_use]
pub fn change_breakdown(amount: u64, denominations: &[u64]) -> Vec<(u64, u64)> {
    let mut breakdown = Vec::new();
    let mut remaining = amount;
    for &denomination in denominations {
        if denomination == 0 {
            continue;
        }
        let count = remaining / denomination;
        if count > 0 {
            breakdown.push((denomination, count));
            remaining -= denomination * count;
        }
    }
    if remaining > 0 {
        breakdown.push((1, remaining));
    }
    breakdown
}

/// One tier of a progressive tariff: a consumption span billed at `rate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TariffTier {
    /// Width of the tier in kWh; `f64::INFINITY` for an open last tier.
    pub span: f64,
    /// Price per kWh within the tier.
    pub rate: f64,
}

/// A progressive tariff: consumption fills the tiers in order.
#[derive(Clone, Debug, PartialEq)]
pub struct TariffSchedule {
    /// Tiers in billing order.
    pub tiers: Vec<TariffTier>,
}

impl Default for TariffSchedule {
    /// The common five-tier Vietnamese residential tariff, VND per kWh.
    fn default() -> Self {
        Self {
            tiers: vec![
                TariffTier { span: 50.0, rate: 1678.0 },
                TariffTier { span: 50.0, rate: 1734.0 },
                TariffTier { span: 100.0, rate: 2014.0 },
                TariffTier { span: 150.0, rate: 2536.0 },
                TariffTier { span: f64::INFINITY, rate: 2927.0 },
            ],
        }
    }
}

impl TariffSchedule {
    /// Bills `kwh` of consumption across the tiers.
    ///
    /// # Errors
    ///
    /// [`ArithError::Negative`] for negative consumption.
    pub fn bill(&self, kwh: f64) -> Result<f64, ArithError> {
        if kwh < 0.0 {
            return Err(ArithError::Negative("kWh"));
        }
        let mut remaining = kwh;
        let mut total = 0.0;
        for tier in &self.tiers {
            let used = remaining.min(tier.span);
            total += used * tier.rate;
            remaining -= used;
            if remaining <= 0.0 {
                break;
            }
        }
        Ok(total)
    }
}
