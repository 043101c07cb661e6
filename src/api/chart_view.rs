use tracing::{debug, trace};

use crate::core::{CandleSeries, Viewport};
use crate::error::ChartResult;
use crate::render::{DrawPlan, Renderer};

use super::ChartLayoutEngine;

/// Host-facing wrapper that owns the most recent `DrawPlan`.
///
/// Data arrival (`set_series`) and container resizes (`resize`) both funnel into
/// [`refresh`](Self::refresh), which recomputes a plan from scratch, hands it to
/// the renderer and replaces the stored plan wholesale. A failed or skipped
/// refresh leaves the stored plan untouched.
pub struct ChartView<R: Renderer> {
    renderer: R,
    engine: ChartLayoutEngine,
    viewport: Viewport,
    series: CandleSeries,
    plan: Option<DrawPlan>,
}

impl<R: Renderer> ChartView<R> {
    /// Creates a view for a host container of `width` pixels.
    #[must_use]
    pub fn new(renderer: R, engine: ChartLayoutEngine, width: u32) -> Self {
        let viewport = engine.viewport_for_width(width);
        Self {
            renderer,
            engine,
            viewport,
            series: CandleSeries::default(),
            plan: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn series(&self) -> &CandleSeries {
        &self.series
    }

    #[must_use]
    pub fn plan(&self) -> Option<&DrawPlan> {
        self.plan.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Replaces the series after a completed fetch and re-lays out the chart.
    pub fn set_series(&mut self, series: CandleSeries) -> ChartResult<bool> {
        debug!(count = series.len(), "series replaced");
        self.series = series;
        self.refresh()
    }

    /// Applies a container width change; the height follows the reference aspect.
    pub fn resize(&mut self, width: u32) -> ChartResult<bool> {
        let viewport = self.engine.viewport_for_width(width);
        if viewport == self.viewport && self.plan.is_some() {
            trace!(width, "resize without size change");
            return Ok(false);
        }
        self.viewport = viewport;
        self.refresh()
    }

    /// Recomputes the plan and renders it.
    ///
    /// Returns `Ok(true)` when a new plan was rendered and stored, `Ok(false)`
    /// when the series is still too short to fill the window.
    pub fn refresh(&mut self) -> ChartResult<bool> {
        let Some(plan) = self.engine.layout(&self.series, self.viewport)? else {
            return Ok(false);
        };
        self.renderer.render(&plan)?;
        self.plan = Some(plan);
        Ok(true)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
