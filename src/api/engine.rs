use tracing::{debug, trace, warn};

use crate::core::primitives::round_px;
use crate::core::{
    CandleSeries, PriceBand, Viewport, candle_count, candle_span, compile_candles,
    display_window, plan_date_axis, plan_price_axis, select_price_band,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawPlan, PlotFrame};

use super::LayoutConfig;
use super::label_format::{format_date_label, format_price_label};

/// Composes range selection, axis planning and candle compilation into one
/// `DrawPlan`.
///
/// The engine only holds its configuration; every call to [`layout`](Self::layout)
/// is independent and side-effect free apart from `tracing` events.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartLayoutEngine {
    config: LayoutConfig,
}

impl ChartLayoutEngine {
    pub fn new(config: LayoutConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Viewport for a host container width, keeping the reference aspect ratio.
    #[must_use]
    pub fn viewport_for_width(&self, width: u32) -> Viewport {
        Viewport::from_reference_width(
            width,
            self.config.reference_width,
            self.config.reference_height,
        )
    }

    /// Lays out the most recent candles that fit into `viewport`.
    ///
    /// Returns `Ok(None)` while the series is shorter than the window the
    /// viewport asks for; that is an expected startup state, not an error.
    pub fn layout(
        &self,
        series: &CandleSeries,
        viewport: Viewport,
    ) -> ChartResult<Option<DrawPlan>> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let config = &self.config;
        let span = candle_span(
            viewport.width,
            config.reference_width,
            config.reference_candle_span,
        );
        let count = candle_count(viewport.width, span, config.window_width_ratio);
        let Some(window) = display_window(series, count) else {
            debug!(
                available = series.len(),
                required = count,
                "not enough history, skipping layout"
            );
            return Ok(None);
        };

        let band = select_price_band(window, config.outlier_sigma).inspect_err(|err| {
            warn!(window = window.len(), error = %err, "price band selection failed");
        })?;
        trace!(
            mean = band.mean_close,
            sdev = band.close_sdev,
            price_min = band.price_min(),
            price_max = band.price_max(),
            "price band selected"
        );

        let price_axis = plan_price_axis(
            &band,
            viewport.height,
            config.price_swing_ratio,
            &config.grid_spacing_candidates,
            format_price_label,
        )?;
        let date_ticks = plan_date_axis(
            window,
            span,
            config.date_axis_thinning(),
            format_date_label,
        );
        let candles = compile_candles(window, &band, price_axis.price_ratio, span);

        let plan = DrawPlan {
            width: viewport.width,
            height: viewport.height,
            baseline_y: self.baseline_y(&band, price_axis.price_ratio, viewport.height),
            price_ratio: price_axis.price_ratio,
            candle_span: span,
            grid_spacing: price_axis.grid_spacing,
            frame: self.plot_frame(viewport, span, window.len()),
            price_ticks: price_axis.ticks,
            date_ticks,
            candles,
        };

        debug!(
            width = plan.width,
            height = plan.height,
            candles = plan.candles.len(),
            price_ticks = plan.price_ticks.len(),
            labels = plan.label_count(),
            grid_spacing = plan.grid_spacing,
            "draw plan compiled"
        );
        Ok(Some(plan))
    }

    fn baseline_y(&self, band: &PriceBand, price_ratio: f64, height: u32) -> i64 {
        round_px(band.price_max() / price_ratio + f64::from(height) * self.config.top_margin_ratio)
    }

    fn plot_frame(&self, viewport: Viewport, span: f64, candle_count: usize) -> PlotFrame {
        let config = &self.config;
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let plot_width = candle_count as f64 * span;
        let font_size_pt = round_px(
            config.reference_font_size_pt * width / f64::from(config.reference_width),
        );

        PlotFrame {
            candle_offset_x: round_px(span * 0.5),
            body_half_width: round_px(span / 3.0),
            plot_right: round_px(plot_width),
            price_label_x: round_px(plot_width + width * config.price_label_gap_ratio),
            date_axis_y: round_px(height * config.date_axis_ratio),
            date_label_y: round_px(height * config.date_label_ratio),
            font_size_pt: font_size_pt.max(config.min_font_size_pt),
            animation_duration: config.animation_duration,
        }
    }
}
