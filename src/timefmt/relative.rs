use chrono::{DateTime, Utc};

use crate::locale::Locale;

/// Floored elapsed time, bucketed for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elapsed {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

/// Buckets `now - timestamp`; each bucket's upper bound is exclusive.
/// Future timestamps (clock skew) count as "just now".
pub fn elapsed_bucket(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Elapsed {
    let elapsed = now.signed_duration_since(timestamp);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return Elapsed::JustNow;
    }
    if minutes < 60 {
        return Elapsed::Minutes(minutes);
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return Elapsed::Hours(hours);
    }

    Elapsed::Days(elapsed.num_days())
}

pub fn format_since(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_since_in(timestamp, now, Locale::English)
}

pub fn format_since_in(timestamp: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let bucket = elapsed_bucket(timestamp, now);
    match locale {
        Locale::English => english(bucket),
        Locale::Japanese => japanese(bucket),
    }
}

fn english(bucket: Elapsed) -> String {
    match bucket {
        Elapsed::JustNow => "just now".to_string(),
        Elapsed::Minutes(m) => format!("{} minutes ago", m),
        Elapsed::Hours(h) => format!("{} hours ago", h),
        Elapsed::Days(d) => format!("{} days ago", d),
    }
}

fn japanese(bucket: Elapsed) -> String {
    match bucket {
        Elapsed::JustNow => "今".to_string(),
        Elapsed::Minutes(m) => format!("{}分前", m),
        Elapsed::Hours(h) => format!("{}時間前", h),
        Elapsed::Days(d) => format!("{}日前", d),
    }
}
