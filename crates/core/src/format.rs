//! Display formatting for read-only projections (detail and list views).

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Label shown for a zero or missing price.
pub const FREE_LABEL: &str = "Free";

/// Placeholder for a missing value.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Format a price as US dollars, or [`FREE_LABEL`] when it is zero, missing,
/// null, or not numeric.
///
/// Accepts the raw JSON value because the backend sends prices as numbers
/// or numeric strings depending on the entity.
///
/// ```
/// use eduadmin_core::format::format_price;
/// use serde_json::json;
///
/// assert_eq!(format_price(Some(&json!(49.5))), "$49.50");
/// assert_eq!(format_price(Some(&json!("0"))), "Free");
/// assert_eq!(format_price(None), "Free");
/// ```
pub fn format_price(value: Option<&Value>) -> String {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match amount {
        Some(a) if a.is_finite() && a != 0.0 => format_amount(a),
        _ => FREE_LABEL.to_string(),
    }
}

/// Format an amount as `$1,234.50`.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// Format a timestamp as a date, e.g. `Mar 7, 2025`.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as date and time, e.g. `Mar 7, 2025 2:05 PM`.
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Format an optional timestamp, falling back to [`EMPTY_PLACEHOLDER`].
pub fn format_optional_date(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(format_date)
        .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
}

/// Format a time range on a single day, e.g. `9:00 AM - 10:30 AM`.
pub fn format_time_range(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    format!(
        "{} - {}",
        start.format("%-I:%M %p"),
        end.format("%-I:%M %p")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn zero_like_prices_are_free() {
        assert_eq!(format_price(Some(&json!(0))), "Free");
        assert_eq!(format_price(Some(&json!(0.0))), "Free");
        assert_eq!(format_price(Some(&json!("0"))), "Free");
        assert_eq!(format_price(Some(&Value::Null)), "Free");
        assert_eq!(format_price(None), "Free");
    }

    #[test]
    fn unparseable_price_is_free() {
        assert_eq!(format_price(Some(&json!("call us"))), "Free");
        assert_eq!(format_price(Some(&json!(true))), "Free");
    }

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(format_price(Some(&json!(49.5))), "$49.50");
        assert_eq!(format_price(Some(&json!("199"))), "$199.00");
    }

    #[test]
    fn formatting_is_stable() {
        let once = format_price(Some(&json!(49.5)));
        let again = format_price(Some(&json!(49.5)));
        assert_eq!(once, again);
    }

    #[test]
    fn large_amounts_are_grouped() {
        assert_eq!(format_amount(1234.5), "$1,234.50");
        assert_eq!(format_amount(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_amount(999.999), "$1,000.00");
    }

    #[test]
    fn dates() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 0).unwrap();
        assert_eq!(format_date(&ts), "Mar 7, 2025");
        assert_eq!(format_datetime(&ts), "Mar 7, 2025 2:05 PM");
        assert_eq!(format_optional_date(None), "-");
    }

    #[test]
    fn time_range() {
        let start = Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 7, 10, 30, 0).unwrap();
        assert_eq!(format_time_range(&start, &end), "9:00 AM - 10:30 AM");
    }
}
