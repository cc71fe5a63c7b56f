//! Timestamp display helpers.
//!
//! Timestamps travel through the model as RFC 3339 strings. Formatting
//! parses lazily; a malformed timestamp is never an error here, the raw
//! string is the fallback display label.

use chrono::DateTime;

fn format_or_raw(timestamp: &str, pattern: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp).map_or_else(
        |_| timestamp.to_string(),
        |dt| dt.format(pattern).to_string(),
    )
}

/// "Mar 2024" style label for trajectory steps.
#[must_use]
pub fn month_year(timestamp: &str) -> String {
    format_or_raw(timestamp, "%b %Y")
}

/// "Mar 18" style label for backlog cards.
#[must_use]
pub fn month_day(timestamp: &str) -> String {
    format_or_raw(timestamp, "%b %-d")
}

/// "Mar 18, 2024" style label for timeline entries.
#[must_use]
pub fn full_date(timestamp: &str) -> String {
    format_or_raw(timestamp, "%b %-d, %Y")
}
