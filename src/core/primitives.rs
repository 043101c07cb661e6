use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Rounds half-up to a whole pixel (`floor(x + 0.5)`).
///
/// `f64::round` rounds half away from zero, which shifts negative half-pixel
/// values by one compared to the browser layouts these plans are checked against.
/// Non-finite input saturates (`NaN` becomes 0).
#[must_use]
pub fn round_px(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Weekday number with Sunday = 0 through Saturday = 6.
#[must_use]
pub fn weekday_number(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_sunday() as i32
}

/// Lenient numeric conversion used at the raw-record boundary.
///
/// Malformed or empty input yields `NaN` so that downstream range checks reject
/// it instead of silently treating it as zero.
#[must_use]
pub fn parse_price_lenient(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
