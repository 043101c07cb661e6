use chrono::{Datelike, Days, NaiveDate, Weekday};

use candle_layout::api::format_date_label;
use candle_layout::core::{Candle, DateAxisThinning, DateTick, plan_date_axis};

fn trading_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(count);
    let mut day = start;
    while days.len() < count {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(day);
        }
        day = day + Days::new(1);
    }
    days
}

fn window_from(dates: &[NaiveDate]) -> Vec<Candle> {
    dates
        .iter()
        .map(|&date| Candle::new(date, 10.0, 12.0, 9.0, 11.0))
        .collect()
}

fn plan(dates: &[NaiveDate]) -> Vec<DateTick> {
    plan_date_axis(
        &window_from(dates),
        30.0,
        DateAxisThinning::default(),
        format_date_label,
    )
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn boundary_at_the_oldest_edge_cutoff_gets_no_label() {
    // Thursday start: Mondays land on indices 2, 7, 12, 17 of a 20 candle window,
    // so the fourth boundary from the newest sits exactly on the 10% cutoff.
    let ticks = plan(&trading_days(date(2017, 1, 5), 20));

    assert_eq!(ticks[2].date.weekday(), Weekday::Mon);
    assert!(ticks[2].draws_gridline);
    assert!(!ticks[2].draws_label);
    assert!(ticks[2].label.is_none());
    assert!(ticks[17].draws_label);
}

#[test]
fn boundary_just_past_the_cutoff_is_labeled() {
    // Wednesday start: Mondays on indices 3, 8, 13, 18.
    let ticks = plan(&trading_days(date(2017, 1, 4), 20));

    assert!(ticks[3].draws_label);
    assert!(ticks[18].draws_label);
    assert!(!ticks[8].draws_label && ticks[8].draws_gridline);
    assert!(!ticks[13].draws_label && ticks[13].draws_gridline);
}

#[test]
fn three_boundaries_label_only_the_newest() {
    let ticks = plan(&trading_days(date(2017, 1, 4), 15));

    let boundaries: Vec<(usize, bool)> = ticks
        .iter()
        .enumerate()
        .filter(|(_, tick)| tick.draws_gridline)
        .map(|(index, tick)| (index, tick.draws_label))
        .collect();
    assert_eq!(boundaries, vec![(3, false), (8, false), (13, true)]);
    assert_eq!(ticks[13].label.as_deref(), Some("Jan 23, 2017"));
}

#[test]
fn oldest_candle_gets_gridline_only_on_monday() {
    let monday_start = plan(&trading_days(date(2017, 1, 2), 5));
    assert!(monday_start[0].draws_gridline);
    assert!(!monday_start[0].draws_label);

    let tuesday_start = plan(&trading_days(date(2017, 1, 3), 5));
    assert!(!tuesday_start[0].draws_gridline);
}

#[test]
fn midweek_holiday_counts_as_a_boundary() {
    // Tuesday 2017-01-10 missing: Monday -> Wednesday is not a one-day step.
    let dates = vec![
        date(2017, 1, 5),
        date(2017, 1, 6),
        date(2017, 1, 9),
        date(2017, 1, 11),
        date(2017, 1, 12),
    ];
    let ticks = plan(&dates);

    let gridlines: Vec<usize> = ticks
        .iter()
        .enumerate()
        .filter(|(_, tick)| tick.draws_gridline)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(gridlines, vec![2, 3]);
}

#[test]
fn skipped_week_on_same_weekday_is_a_boundary() {
    let dates = vec![date(2017, 1, 2), date(2017, 1, 9), date(2017, 1, 10)];
    let ticks = plan(&dates);
    assert!(ticks[1].draws_gridline);
    assert!(!ticks[2].draws_gridline);
}

#[test]
fn ticks_align_with_candles_in_chronological_order() {
    let dates = trading_days(date(2017, 2, 1), 38);
    let ticks = plan_date_axis(
        &window_from(&dates),
        7.5,
        DateAxisThinning::default(),
        format_date_label,
    );

    assert_eq!(ticks.len(), dates.len());
    for (index, (tick, date)) in ticks.iter().zip(&dates).enumerate() {
        assert_eq!(tick.date, *date);
        assert_eq!(tick.pixel_x, (index as f64 * 7.5 + 0.5).floor() as i64);
        assert_eq!(tick.label.is_some(), tick.draws_label);
        assert!(!tick.draws_label || tick.draws_gridline);
    }
}

#[test]
fn custom_cadence_labels_every_boundary() {
    let thinning = DateAxisThinning {
        label_cadence: 1,
        label_free_oldest_ratio: 0.0,
    };
    let ticks = plan_date_axis(
        &window_from(&trading_days(date(2017, 1, 4), 15)),
        30.0,
        thinning,
        format_date_label,
    );
    let labeled: Vec<usize> = ticks
        .iter()
        .enumerate()
        .filter(|(_, tick)| tick.draws_label)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(labeled, vec![3, 8, 13]);
}

#[test]
fn empty_window_yields_no_ticks() {
    assert!(plan(&[]).is_empty());
}
