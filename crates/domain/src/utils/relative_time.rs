//! Human-readable relative timestamps
//!
//! Produces the display labels shown next to logged activities.

use chrono::{DateTime, Utc};

/// Format how long ago `then` was relative to `now`
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
///
/// use ecotrace_domain::relative_label;
///
/// let now = Utc::now();
/// assert_eq!(relative_label(now, now), "Just now");
/// assert_eq!(relative_label(now - Duration::minutes(30), now), "30 minutes ago");
/// assert_eq!(relative_label(now - Duration::hours(2), now), "2 hours ago");
/// ```
pub fn relative_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = elapsed.num_days();
    if days < 7 {
        return plural(days, "day");
    }

    then.format("%b %d, %Y").to_string()
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
