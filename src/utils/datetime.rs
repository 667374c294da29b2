//! Date and time utility functions

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Default format for created/updated dates in task metadata
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// The current day as seen by the `today` filter.
///
/// Day boundaries are UTC so a task's "created today" status does not depend
/// on the machine's timezone.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whether `format` is a strftime pattern chrono can render.
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format a timestamp as a local calendar date.
///
/// Falls back to ISO `YYYY-MM-DD` if `format` is not a valid pattern, so a bad
/// pattern can never abort rendering.
pub fn format_local_date(timestamp: &DateTime<Utc>, format: &str) -> String {
    let local = timestamp.with_timezone(&Local);
    if is_valid_format(format) {
        local.format(format).to_string()
    } else {
        local.format(DISPLAY_DATE_FORMAT).to_string()
    }
}
