//! Display formatting shared by the browser and terminal front-ends.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Clock time of a message, `HH:MM` in local time
pub fn format_message_time(timestamp: DateTime<Utc>) -> String {
    format_message_time_in(timestamp, &Local)
}

/// Sidebar date: clock time within the last 24 hours, `Mon D` otherwise
pub fn format_conversation_date(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_conversation_date_in(updated_at, now, &Local)
}

pub fn format_message_time_in<Tz: TimeZone>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(tz).format("%H:%M").to_string()
}

pub fn format_conversation_date_in<Tz: TimeZone>(
    updated_at: DateTime<Utc>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if now.signed_duration_since(updated_at) < chrono::Duration::hours(24) {
        format_message_time_in(updated_at, tz)
    } else {
        updated_at.with_timezone(tz).format("%b %-d").to_string()
    }
}
