//! Date/time utilities for outbox.

use chrono::{DateTime, Utc};

/// Display format for send timestamps (day.month.year hour:minute, 24h).
pub const SENT_AT_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Format a send timestamp for display.
///
/// Messages that were never dispatched have no timestamp and render
/// as `-`.
pub fn format_sent_at(sent_at: Option<&DateTime<Utc>>) -> String {
    match sent_at {
        Some(dt) => dt.format(SENT_AT_FORMAT).to_string(),
        None => "-".to_string(),
    }
}
