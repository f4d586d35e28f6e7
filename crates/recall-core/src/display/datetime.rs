//! Timestamp formatting for topic metadata.
//!
//! Scheduling runs on plain calendar dates, but topics also record the
//! instants they were created and last touched. Those render through this
//! wrapper in the viewer's own timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a stored instant as `YYYY-MM-DD HH:MM:SS TZ` in the system
/// timezone, for the "Created" and "Updated" lines of a topic view.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
