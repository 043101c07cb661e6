use serde::{Deserialize, Serialize};

use crate::core::{CandleGeometry, DateTick, PriceTick, Viewport};
use crate::error::{ChartError, ChartResult};

/// Fixed chart furniture derived from the viewport and window size.
///
/// X values are in viewport pixels; the candle and date-tick `pixel_x` values
/// are offsets from `candle_offset_x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub candle_offset_x: i64,
    pub body_half_width: i64,
    /// Right end of horizontal gridlines and of the date axis line.
    pub plot_right: i64,
    pub price_label_x: i64,
    /// Y of the date axis line; vertical date gridlines run from 0 to here.
    pub date_axis_y: i64,
    pub date_label_y: i64,
    pub font_size_pt: i64,
    /// Duration of the body grow-in transition, in renderer time units.
    pub animation_duration: u32,
}

/// Renderer-agnostic description of one chart render.
///
/// A plan is never mutated after the engine returns it; the next render cycle
/// produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPlan {
    pub width: u32,
    pub height: u32,
    /// Y translation of price space: price-derived Y values are relative to it.
    pub baseline_y: i64,
    pub price_ratio: f64,
    pub candle_span: f64,
    pub grid_spacing: f64,
    pub frame: PlotFrame,
    pub price_ticks: Vec<PriceTick>,
    pub date_ticks: Vec<DateTick>,
    pub candles: Vec<CandleGeometry>,
}

impl DrawPlan {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport().is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }

        if !self.price_ratio.is_finite() || self.price_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "draw plan price ratio must be finite and > 0".to_owned(),
            ));
        }

        if self.date_ticks.len() != self.candles.len() {
            return Err(ChartError::InvalidData(format!(
                "draw plan has {} date ticks for {} candles",
                self.date_ticks.len(),
                self.candles.len()
            )));
        }

        for (tick, candle) in self.date_ticks.iter().zip(&self.candles) {
            if tick.date != candle.date || tick.pixel_x != candle.pixel_x {
                return Err(ChartError::InvalidData(format!(
                    "date tick {} is not aligned with its candle",
                    tick.date
                )));
            }
            if tick.draws_label && !tick.draws_gridline {
                return Err(ChartError::InvalidData(format!(
                    "date tick {} has a label without a gridline",
                    tick.date
                )));
            }
        }

        if self
            .price_ticks
            .windows(2)
            .any(|pair| pair[0].value <= pair[1].value)
        {
            return Err(ChartError::InvalidData(
                "price ticks must be strictly descending".to_owned(),
            ));
        }

        for candle in &self.candles {
            if let Some(body) = candle.body {
                if body.height_start < 1 || body.height_end < 1 {
                    return Err(ChartError::InvalidData(format!(
                        "candle {} body must be at least one pixel tall",
                        candle.date
                    )));
                }
            }
        }

        Ok(())
    }

    /// Number of date ticks that carry a text label.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.date_ticks.iter().filter(|tick| tick.draws_label).count()
    }
}
