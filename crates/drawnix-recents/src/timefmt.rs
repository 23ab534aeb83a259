//! Humanized "time ago" labels for submenu rows.

use chrono::{DateTime, Utc};

/// Maps an absolute timestamp to a bucketed human string, evaluated
/// against `now` at render time.
///
/// Buckets use strict less-than comparisons, so boundary values fall
/// into the next coarser bucket: exactly 60 minutes reads "1 hour ago",
/// exactly 24 hours reads "1 day ago", and exactly 7 days falls through
/// to the calendar date rendered with `date_format` (a chrono format
/// string). Timestamps in the future clamp to "Just now".
#[must_use]
pub fn format_relative(
    last_modified: DateTime<Utc>,
    now: DateTime<Utc>,
    date_format: &str,
) -> String {
    let elapsed = now.signed_duration_since(last_modified);

    let mins = elapsed.num_minutes();
    if mins < 1 {
        return "Just now".to_string();
    }
    if mins < 60 {
        return format!("{mins} min{} ago", plural(mins));
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours} hour{} ago", plural(hours));
    }

    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days} day{} ago", plural(days));
    }

    last_modified.format(date_format).to_string()
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}
