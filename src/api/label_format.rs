use chrono::NaiveDate;

/// Formats a labeled date tick as `Mon D, YYYY`, e.g. `Jan 5, 2017`.
#[must_use]
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a price gridline value with the shortest exact representation.
///
/// Whole prices print without a fractional part (`19000`, not `19000.0`).
#[must_use]
pub fn format_price_label(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    format!("{value}")
}
