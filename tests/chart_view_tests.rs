use chrono::{Datelike, Days, NaiveDate, Weekday};

use candle_layout::core::{Candle, CandleSeries, Viewport};
use candle_layout::render::{DrawPlan, NullRenderer, Renderer};
use candle_layout::{ChartError, ChartLayoutEngine, ChartResult, ChartView};

fn series(count: usize) -> CandleSeries {
    let mut candles = Vec::with_capacity(count);
    let mut day = NaiveDate::from_ymd_opt(2017, 1, 2).expect("valid date");
    while candles.len() < count {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            let i = candles.len() as f64;
            let close = 19_000.0 + (i * 0.7).sin() * 150.0;
            candles.push(Candle::new(day, close - 20.0, close + 60.0, close - 60.0, close));
        }
        day = day + Days::new(1);
    }
    candles.into()
}

#[derive(Debug, Default)]
struct RecordingRenderer {
    viewports: Vec<Viewport>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, plan: &DrawPlan) -> ChartResult<()> {
        self.viewports.push(plan.viewport());
        Ok(())
    }
}

#[test]
fn data_trigger_renders_and_stores_plan() {
    let mut view = ChartView::new(NullRenderer::default(), ChartLayoutEngine::default(), 1280);
    assert_eq!(view.viewport(), Viewport::new(1280, 720));
    assert!(view.plan().is_none());

    let rendered = view.set_series(series(60)).expect("refresh");
    assert!(rendered);
    assert_eq!(view.renderer().render_count, 1);
    assert_eq!(view.renderer().last_candle_count, 38);
    assert_eq!(view.plan().map(|plan| plan.candles.len()), Some(38));
}

#[test]
fn short_series_skips_without_rendering() {
    let mut view = ChartView::new(NullRenderer::default(), ChartLayoutEngine::default(), 1280);
    let rendered = view.set_series(series(10)).expect("skip is not an error");
    assert!(!rendered);
    assert_eq!(view.renderer().render_count, 0);
    assert!(view.plan().is_none());
}

#[test]
fn resize_trigger_replaces_plan_with_new_dimensions() {
    let mut view = ChartView::new(RecordingRenderer::default(), ChartLayoutEngine::default(), 1280);
    view.set_series(series(60)).expect("first render");

    assert!(view.resize(640).expect("resize"));
    assert_eq!(view.viewport(), Viewport::new(640, 360));
    assert_eq!(view.plan().map(DrawPlan::viewport), Some(Viewport::new(640, 360)));

    // Same width again: nothing to recompute.
    assert!(!view.resize(640).expect("noop resize"));

    let renderer = view.into_renderer();
    assert_eq!(
        renderer.viewports,
        vec![Viewport::new(1280, 720), Viewport::new(640, 360)]
    );
}

#[test]
fn failed_refresh_keeps_previous_plan() {
    let mut view = ChartView::new(NullRenderer::default(), ChartLayoutEngine::default(), 1280);
    view.set_series(series(60)).expect("first render");
    let previous = view.plan().cloned();

    let flat: CandleSeries = series(60)
        .candles()
        .iter()
        .map(|candle| Candle::new(candle.date, 1.0, 1.0, 1.0, 1.0))
        .collect::<Vec<_>>()
        .into();
    let err = view.set_series(flat).expect_err("degenerate");
    assert!(matches!(err, ChartError::DegenerateRange));
    assert_eq!(view.plan().cloned(), previous);
    assert_eq!(view.renderer().render_count, 1);

    assert!(view.set_series(series(70)).expect("recovers"));
    assert_eq!(view.renderer().render_count, 2);
}
