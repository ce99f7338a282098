//! # numera-arith
//!
//! Everyday arithmetic utilities:
//!
//! - Unit conversions: temperature, clock time (`convert`)
//! - Checked Euclidean division and guarded quotients (`division`)
//! - Greedy change-making and progressive tariffs (`money`)
//! - Gregorian calendar arithmetic (`calendar`)
//!
//! Tables that parameterize a computation (denominations, tariff tiers)
//! are data supplied by the caller; the conventional tables ship as
//! defaults.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use thiserror::Error;

pub mod calendar;
pub mod convert;
pub mod division;
pub mod money;

pub use calendar::{days_in_month, days_in_year, is_leap_year, Date};
pub use convert::{celsius_to_fahrenheit, fahrenheit_to_celsius, hms_to_seconds, seconds_to_hms};
pub use division::{binomial_square_quotient, div_rem};
pub use money::{change_breakdown, vnd_denominations, TariffSchedule, TariffTier};

/// Errors reported by arithmetic utilities.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithError {
    /// Division or evaluation hit a zero denominator.
    #[error("division by zero")]
    DivisionByZero,
    /// A quantity that must be non-negative was negative.
    #[error("{0} must be non-negative")]
    Negative(&'static str),
    /// A calendar component was out of range.
    #[error("invalid date: {0}")]
    InvalidDate(&'static str),
}
