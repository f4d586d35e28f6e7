//! Date arithmetic helpers shared by the query modules.

use jiff::{civil, Span, Timestamp};

/// Adds a number of days to a calendar date, clamping at the calendar
/// horizon.
///
/// Interval growth is unbounded (each completion doubles it), so a long-lived
/// topic can request a jump past the maximum representable date; clamping is
/// the only sensible answer there.
pub(crate) fn add_days(date: civil::Date, days: i64) -> civil::Date {
    Span::new()
        .try_days(days)
        .ok()
        .and_then(|span| date.checked_add(span).ok())
        .unwrap_or(civil::Date::MAX)
}

/// The UTC calendar date a stored creation timestamp falls on.
pub(crate) fn timestamp_date(ts: Timestamp) -> civil::Date {
    ts.to_zoned(jiff::tz::TimeZone::UTC).date()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_days_normal_case() {
        let date = civil::date(2024, 1, 10);
        assert_eq!(add_days(date, 4), civil::date(2024, 1, 14));
        assert_eq!(add_days(date, 22), civil::date(2024, 2, 1));
    }

    #[test]
    fn test_add_days_clamps_at_horizon() {
        let date = civil::date(2024, 1, 10);
        assert_eq!(add_days(date, i64::from(u32::MAX)), civil::Date::MAX);
    }
}
