use serde::{Deserialize, Serialize};

use crate::core::Candle;
use crate::error::{ChartError, ChartResult};

/// Default half-width of the outlier acceptance band, in standard deviations.
pub const DEFAULT_OUTLIER_SIGMA: f64 = 9.0;

/// Visible price band resolved from one display window.
///
/// This is the explicit hand-off between outlier filtering and the axis/candle
/// planners, so none of them recompute statistics on their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub mean_close: f64,
    pub close_sdev: f64,
    /// Exclusive lower edge of the acceptance band.
    pub accept_low: f64,
    /// Exclusive upper edge of the acceptance band.
    pub accept_high: f64,
    pub candle_at_max: Candle,
    pub candle_at_min: Candle,
}

impl PriceBand {
    #[must_use]
    pub fn price_max(&self) -> f64 {
        self.candle_at_max.high
    }

    #[must_use]
    pub fn price_min(&self) -> f64 {
        self.candle_at_min.low
    }

    /// Inclusive membership test used for candle visibility.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.price_min() <= price && price <= self.price_max()
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.price_max() - self.price_min()
    }
}

/// Selects the visible price band with a `sigma`-wide outlier guard.
///
/// Mean and sample standard deviation are taken over closing prices. The
/// highest `high` and the lowest `low` are searched independently among values
/// strictly inside `mean ± sigma·sdev`; ties go to the later candle.
pub fn select_price_band(window: &[Candle], sigma: f64) -> ChartResult<PriceBand> {
    if window.len() < 2 {
        return Err(ChartError::InsufficientData {
            count: window.len(),
        });
    }

    let count = window.len() as f64;
    let mean_close = window.iter().map(|candle| candle.close).sum::<f64>() / count;
    let variance = window
        .iter()
        .map(|candle| (candle.close - mean_close).powi(2))
        .sum::<f64>()
        / (count - 1.0);
    let close_sdev = variance.sqrt();
    let accept_low = mean_close - sigma * close_sdev;
    let accept_high = mean_close + sigma * close_sdev;
    let accepts = |price: f64| accept_low < price && price < accept_high;

    let candle_at_max = window
        .iter()
        .copied()
        .filter(|candle| accepts(candle.high))
        .reduce(|best, candle| if best.high > candle.high { best } else { candle })
        .ok_or(ChartError::DegenerateRange)?;
    let candle_at_min = window
        .iter()
        .copied()
        .filter(|candle| accepts(candle.low))
        .reduce(|best, candle| if best.low < candle.low { best } else { candle })
        .ok_or(ChartError::DegenerateRange)?;

    let band = PriceBand {
        mean_close,
        close_sdev,
        accept_low,
        accept_high,
        candle_at_max,
        candle_at_min,
    };

    // A flat band would make the price ratio zero.
    if band.span() <= 0.0 {
        return Err(ChartError::DegenerateRange);
    }

    Ok(band)
}
