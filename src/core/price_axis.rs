use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::PriceBand;
use crate::core::primitives::round_px;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_GRID_SPACING_CANDIDATES: [f64; 6] = [100.0, 200.0, 300.0, 400.0, 500.0, 1000.0];
pub const DEFAULT_PRICE_SWING_RATIO: f64 = 0.6;
/// Target number of grid intervals across the price swing.
const GRID_INTERVALS_PER_SWING: f64 = 5.0;

/// One horizontal price gridline.
///
/// `pixel_y` is relative to the plan baseline; higher prices get smaller values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTick {
    pub value: f64,
    pub pixel_y: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAxisPlan {
    /// Price units per vertical pixel.
    pub price_ratio: f64,
    pub grid_spacing: f64,
    pub ticks: Vec<PriceTick>,
}

/// Price units per pixel so that the band fills `swing_ratio` of the height.
pub fn price_ratio(band: &PriceBand, height: u32, swing_ratio: f64) -> ChartResult<f64> {
    if height == 0 {
        return Err(ChartError::InvalidData("height must be > 0".to_owned()));
    }
    let ratio = band.span() / swing_ratio / f64::from(height);
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(ChartError::DegenerateRange);
    }
    Ok(ratio)
}

/// Picks the candidate closest to a fifth of `range`.
///
/// Walks the candidates in order; a later candidate whose distance is lesser
/// or equal replaces the current pick.
#[must_use]
pub fn select_grid_spacing(range: f64, candidates: &[f64]) -> Option<f64> {
    let target = range / GRID_INTERVALS_PER_SWING;
    candidates.iter().copied().reduce(|best, candidate| {
        if (best - target).abs() < (candidate - target).abs() {
            best
        } else {
            candidate
        }
    })
}

/// Enumerates gridlines from just below the band top down to just above its bottom.
pub fn plan_price_axis(
    band: &PriceBand,
    height: u32,
    swing_ratio: f64,
    candidates: &[f64],
    format_label: impl Fn(f64) -> String,
) -> ChartResult<PriceAxisPlan> {
    let price_ratio = price_ratio(band, height, swing_ratio)?;
    let grid_spacing = select_grid_spacing(band.span(), candidates).ok_or_else(|| {
        ChartError::InvalidData("grid spacing candidates must not be empty".to_owned())
    })?;

    let price_min = band.price_min();
    let mut ticks = Vec::new();
    let mut value = (band.price_max() / grid_spacing).floor() * grid_spacing;
    while value > price_min {
        ticks.push(PriceTick {
            value,
            pixel_y: -round_px(value / price_ratio),
            label: format_label(value),
        });
        let next = value - grid_spacing;
        // Spacing below the float resolution of `value` would never advance.
        if next >= value {
            warn!(
                grid_spacing,
                value,
                price_min,
                ticks = ticks.len(),
                "price grid stalled"
            );
            break;
        }
        value = next;
    }

    Ok(PriceAxisPlan {
        price_ratio,
        grid_spacing,
        ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_tie_prefers_later_candidate() {
        // range / 5 = 150 sits exactly between 100 and 200.
        assert_eq!(
            select_grid_spacing(750.0, &DEFAULT_GRID_SPACING_CANDIDATES),
            Some(200.0)
        );
    }

    #[test]
    fn spacing_clamps_to_extremes() {
        assert_eq!(
            select_grid_spacing(10.0, &DEFAULT_GRID_SPACING_CANDIDATES),
            Some(100.0)
        );
        assert_eq!(
            select_grid_spacing(100_000.0, &DEFAULT_GRID_SPACING_CANDIDATES),
            Some(1000.0)
        );
        assert_eq!(select_grid_spacing(500.0, &[]), None);
    }
}
