use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::primitives::round_px;
use crate::core::{Candle, CandleSeries, PriceBand};

pub const DEFAULT_REFERENCE_CANDLE_SPAN: f64 = 30.0;
pub const DEFAULT_WINDOW_WIDTH_RATIO: f64 = 0.88;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleDirection {
    Up,
    Down,
}

impl CandleDirection {
    /// Flat candles (`close == open`) classify as `Down`.
    #[must_use]
    pub fn of(candle: Candle) -> Self {
        if candle.is_up() { Self::Up } else { Self::Down }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WickGeometry {
    pub top_y: i64,
    pub bottom_y: i64,
}

/// Body rectangle with its grow-in animation endpoints.
///
/// The renderer interpolates from `*_start` to `*_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyGeometry {
    pub top_y_start: i64,
    pub top_y_end: i64,
    pub height_start: i64,
    pub height_end: i64,
}

/// Resolved geometry for one displayed candle, Y relative to the plan baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub date: NaiveDate,
    pub pixel_x: i64,
    /// `None` when high or low falls outside the price band.
    pub wick: Option<WickGeometry>,
    /// `None` when open or close falls outside the price band.
    pub body: Option<BodyGeometry>,
    pub direction: CandleDirection,
}

/// Pixel pitch between candle centers, scaled linearly from the reference width.
#[must_use]
pub fn candle_span(width: u32, reference_width: u32, reference_span: f64) -> f64 {
    reference_span * f64::from(width) / f64::from(reference_width)
}

/// Number of candles that fit in `window_width_ratio` of the viewport width.
#[must_use]
pub fn candle_count(width: u32, candle_span: f64, window_width_ratio: f64) -> usize {
    let count = round_px(f64::from(width) * window_width_ratio / candle_span);
    usize::try_from(count).unwrap_or(0)
}

/// Most recent `count` candles, or `None` while the series is still too short.
#[must_use]
pub fn display_window(series: &CandleSeries, count: usize) -> Option<&[Candle]> {
    if series.len() < count {
        return None;
    }
    Some(series.tail(count))
}

/// Compiles per-candle geometry for a display window.
///
/// Wick and body are independently clipped against the band (inclusive).
#[must_use]
pub fn compile_candles(
    window: &[Candle],
    band: &PriceBand,
    price_ratio: f64,
    candle_span: f64,
) -> Vec<CandleGeometry> {
    #[cfg(feature = "parallel-projection")]
    {
        window
            .par_iter()
            .enumerate()
            .map(|(index, candle)| {
                compile_single_candle(index, *candle, band, price_ratio, candle_span)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        window
            .iter()
            .enumerate()
            .map(|(index, candle)| {
                compile_single_candle(index, *candle, band, price_ratio, candle_span)
            })
            .collect()
    }
}

fn compile_single_candle(
    index: usize,
    candle: Candle,
    band: &PriceBand,
    price_ratio: f64,
    candle_span: f64,
) -> CandleGeometry {
    let to_y = |price: f64| -round_px(price / price_ratio);

    let wick = (band.contains(candle.high) && band.contains(candle.low)).then(|| WickGeometry {
        top_y: to_y(candle.high),
        bottom_y: to_y(candle.low),
    });

    let body = (band.contains(candle.open) && band.contains(candle.close)).then(|| {
        let settled_height = round_px((candle.close - candle.open).abs() / price_ratio);
        BodyGeometry {
            top_y_start: to_y(candle.open),
            top_y_end: to_y(candle.open.max(candle.close)),
            height_start: 1,
            height_end: if settled_height == 0 { 1 } else { settled_height },
        }
    });

    CandleGeometry {
        date: candle.date,
        pixel_x: round_px(index as f64 * candle_span),
        wick,
        body,
        direction: CandleDirection::of(candle),
    }
}
