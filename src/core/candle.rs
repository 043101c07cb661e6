use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, parse_price_lenient};
use crate::error::{ChartError, ChartResult};

/// One trading day of open/high/low/close prices.
///
/// `low <= open, close <= high` is assumed but not enforced: feeds occasionally
/// deliver broken rows and the outlier guard downstream is what keeps them from
/// distorting the scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    #[must_use]
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }

    /// Converts strongly-typed decimal input into a candle.
    pub fn from_decimal(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            date,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        ))
    }

    /// Builds a candle from a raw quote record.
    ///
    /// Price conversion never fails (malformed values become `NaN`); only an
    /// unparsable date is rejected.
    pub fn from_raw(quote: &RawQuote) -> ChartResult<Self> {
        Ok(Self::new(
            parse_quote_date(&quote.date)?,
            parse_price_lenient(&quote.open),
            parse_price_lenient(&quote.high),
            parse_price_lenient(&quote.low),
            parse_price_lenient(&quote.close),
        ))
    }

    /// Returns `true` only when close is strictly above open.
    #[must_use]
    pub fn is_up(self) -> bool {
        self.close > self.open
    }
}

/// Raw quote record as delivered by the data-fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuote {
    #[serde(alias = "Date")]
    pub date: String,
    #[serde(alias = "Open")]
    pub open: String,
    #[serde(alias = "High")]
    pub high: String,
    #[serde(alias = "Low")]
    pub low: String,
    #[serde(alias = "Close")]
    pub close: String,
}

/// Chronologically ascending candle sequence, consumed read-only by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Wraps candles that are already ordered ascending by date.
    #[must_use]
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    /// Converts ascending raw quotes into a series.
    pub fn from_raw_quotes(quotes: &[RawQuote]) -> ChartResult<Self> {
        let candles = quotes
            .iter()
            .map(Candle::from_raw)
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self::new(candles))
    }

    /// Parses a JSON array of raw quotes.
    ///
    /// Quote services commonly answer newest-first; pass `newest_first = true`
    /// to have the records flipped into chronological order.
    pub fn from_json_quotes(input: &str, newest_first: bool) -> ChartResult<Self> {
        let mut quotes: Vec<RawQuote> = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse quotes json: {e}")))?;
        if newest_first {
            quotes.reverse();
        }
        Self::from_raw_quotes(&quotes)
    }

    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Returns the most recent `count` candles in chronological order.
    #[must_use]
    pub fn tail(&self, count: usize) -> &[Candle] {
        let start = self.candles.len().saturating_sub(count);
        &self.candles[start..]
    }
}

impl From<Vec<Candle>> for CandleSeries {
    fn from(candles: Vec<Candle>) -> Self {
        Self::new(candles)
    }
}

fn parse_quote_date(raw: &str) -> ChartResult<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(time.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .map_err(|e| ChartError::InvalidData(format!("unparsable quote date `{raw}`: {e}")))
}
