use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::Candle;
use crate::core::primitives::{round_px, weekday_number};

pub const DEFAULT_LABEL_CADENCE: usize = 3;
pub const DEFAULT_LABEL_FREE_OLDEST_RATIO: f64 = 0.1;

/// One date-axis mark, aligned 1:1 with a displayed candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTick {
    pub date: NaiveDate,
    pub draws_gridline: bool,
    pub draws_label: bool,
    /// Offset from the first candle center.
    pub pixel_x: i64,
    /// Present exactly when `draws_label` is set.
    pub label: Option<String>,
}

/// Label thinning knobs for [`plan_date_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateAxisThinning {
    /// Only every `label_cadence`-th week boundary, counted from the newest, is labeled.
    pub label_cadence: usize,
    /// Fraction of the window, from the oldest candle, where labels are suppressed.
    pub label_free_oldest_ratio: f64,
}

impl Default for DateAxisThinning {
    fn default() -> Self {
        Self {
            label_cadence: DEFAULT_LABEL_CADENCE,
            label_free_oldest_ratio: DEFAULT_LABEL_FREE_OLDEST_RATIO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickKind {
    Plain,
    Gridline,
    Labeled,
}

/// Plans date ticks for a chronological window.
///
/// The window is walked from the newest candle backwards. A candle whose
/// weekday number is not exactly one more than its predecessor's marks a week
/// boundary and always gets a gridline. Boundaries are counted from the newest
/// end; only counts divisible by `label_cadence` get a label, and never inside
/// the label-free oldest edge (cutoff inclusive). Any gap, including a holiday
/// inside one week, is treated as a boundary.
pub fn plan_date_axis(
    window: &[Candle],
    candle_span: f64,
    thinning: DateAxisThinning,
    format_label: impl Fn(NaiveDate) -> String,
) -> Vec<DateTick> {
    let cadence = thinning.label_cadence.max(1);
    let label_free_cutoff = window.len() as f64 * thinning.label_free_oldest_ratio;
    let mut boundary_count = 0usize;
    let mut kinds = Vec::with_capacity(window.len());

    for index in (0..window.len()).rev() {
        let date = window[index].date;
        if index == 0 {
            kinds.push(if date.weekday() == Weekday::Mon {
                TickKind::Gridline
            } else {
                TickKind::Plain
            });
            continue;
        }

        let delta = weekday_number(date) - weekday_number(window[index - 1].date);
        // Consecutive trading day within one week.
        if delta == 1 {
            kinds.push(TickKind::Plain);
            continue;
        }

        let kind = if boundary_count % cadence != 0 || index as f64 <= label_free_cutoff {
            TickKind::Gridline
        } else {
            TickKind::Labeled
        };
        kinds.push(kind);
        boundary_count += 1;
    }
    kinds.reverse();

    window
        .iter()
        .zip(kinds)
        .enumerate()
        .map(|(index, (candle, kind))| {
            let draws_label = kind == TickKind::Labeled;
            DateTick {
                date: candle.date,
                draws_gridline: kind != TickKind::Plain,
                draws_label,
                pixel_x: round_px(index as f64 * candle_span),
                label: draws_label.then(|| format_label(candle.date)),
            }
        })
        .collect()
}
