use chrono::{Datelike, Days, NaiveDate, Weekday};

use candle_layout::api::DRAW_PLAN_JSON_SCHEMA_V1;
use candle_layout::core::{Candle, CandleSeries, Viewport};
use candle_layout::render::{DrawPlan, NullRenderer, Renderer};
use candle_layout::telemetry::init_default_tracing;
use candle_layout::{ChartError, ChartLayoutEngine};

fn sample_plan() -> DrawPlan {
    let mut candles = Vec::new();
    let mut day = NaiveDate::from_ymd_opt(2016, 10, 3).expect("valid date");
    while candles.len() < 45 {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            let i = candles.len() as f64;
            let close = 17_000.0 + i * 12.5;
            candles.push(Candle::new(day, close - 40.0, close + 70.0, close - 90.0, close));
        }
        day = day + Days::new(1);
    }
    ChartLayoutEngine::default()
        .layout(&CandleSeries::new(candles), Viewport::new(1280, 720))
        .expect("layout")
        .expect("enough history")
}

#[test]
fn contract_v1_round_trips() {
    let plan = sample_plan();
    let json = plan.to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json value");
    assert_eq!(value["schema_version"], DRAW_PLAN_JSON_SCHEMA_V1);
    assert_eq!(DrawPlan::from_json_compat_str(&json).expect("parse"), plan);
}

#[test]
fn bare_plan_json_is_accepted() {
    let plan = sample_plan();
    let json = serde_json::to_string(&plan).expect("serialize");
    assert_eq!(DrawPlan::from_json_compat_str(&json).expect("parse"), plan);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let plan = sample_plan();
    let json = plan
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replacen("\"schema_version\": 1", "\"schema_version\": 7", 1);
    assert!(matches!(
        DrawPlan::from_json_compat_str(&json),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn null_renderer_rejects_misaligned_plans() {
    let mut plan = sample_plan();
    let mut renderer = NullRenderer::default();
    renderer.render(&plan).expect("valid plan");
    assert_eq!(renderer.last_label_count, plan.label_count());

    plan.date_ticks.pop();
    assert!(renderer.render(&plan).is_err());
    assert_eq!(renderer.render_count, 1);
}

#[test]
fn default_tracing_is_opt_in() {
    let initialized = init_default_tracing();
    if cfg!(feature = "telemetry") {
        // A second install always fails because the global subscriber is set.
        assert!(!init_default_tracing());
    } else {
        assert!(!initialized);
    }
}
