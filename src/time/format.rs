//! Human readable timestamps and amounts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Long-form date, e.g. `December 31, 2025, 11:59 PM`.
pub fn format_long_date(ts: DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y, %I:%M %p").to_string()
}

/// Elapsed time since `ts`: "just now", "5m ago", "3h ago", "2d ago", or the
/// long date once a week has passed.
pub fn format_relative(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (now - ts).num_milliseconds();
    let mins = diff_ms.div_euclid(60_000);
    let hours = diff_ms.div_euclid(3_600_000);
    let days = diff_ms.div_euclid(86_400_000);

    if mins < 1 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        format_long_date(ts)
    }
}

/// Format an amount with thousands separators and at most three decimals.
pub fn group_thousands(amount: Decimal) -> String {
    let rounded = amount.round_dp(3).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
