//! Display formatting helpers.
//!
//! All functions here are pure: relative time takes `now` explicitly so the
//! output is deterministic for a fixed clock.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const SECS_PER_MONTH: i64 = 30 * SECS_PER_DAY;
const SECS_PER_YEAR: i64 = 365 * SECS_PER_DAY;
const MONTHS_PER_YEAR: i64 = 12;

/// Formats an amount as US dollars, e.g. `2500` -> `$2,500.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Inserts `,` separators every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a timestamp as a short date, e.g. `Oct 18, 2026`.
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Formats a ratio in `[0, 1]` as a percentage with one decimal, e.g. `92.5%`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Formats `ts` relative to `now`.
///
/// Past instants render as `5 minutes ago`, future ones as `in 5 minutes`.
/// Anything within a minute either way renders as `just now`. Months are
/// 30 days and years 365 days; month units stop below 12 months.
pub fn format_relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(ts);
    let future = delta < Duration::zero();
    let secs = delta.num_seconds().abs();

    if secs < SECS_PER_MINUTE {
        return "just now".to_string();
    }

    let (count, unit) = if secs < SECS_PER_HOUR {
        (secs / SECS_PER_MINUTE, "minute")
    } else if secs < SECS_PER_DAY {
        (secs / SECS_PER_HOUR, "hour")
    } else if secs < SECS_PER_MONTH {
        (secs / SECS_PER_DAY, "day")
    } else if secs < MONTHS_PER_YEAR * SECS_PER_MONTH {
        (secs / SECS_PER_MONTH, "month")
    } else {
        // 360 to 364 days is twelve 30-day months but not yet a 365-day year
        ((secs / SECS_PER_YEAR).max(1), "year")
    };

    let plural = if count == 1 { "" } else { "s" };
    if future {
        format!("in {} {}{}", count, unit, plural)
    } else {
        format!("{} {}{} ago", count, unit, plural)
    }
}
