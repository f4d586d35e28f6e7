//! Filter types for querying revisions.

use jiff::civil;

use super::RevisionStatus;

/// How strictly free-text filter values are interpreted.
///
/// The lenient mode mirrors the original behavior of the revision listing
/// endpoint: an unparseable date filter is silently dropped rather than
/// rejected, so a sloppy client still gets an (unfiltered) answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Leniency {
    /// Unparseable values are ignored and the filter is skipped
    #[default]
    Lenient,
    /// Unparseable values are reported as invalid input
    Strict,
}

/// Filter options for querying revisions.
#[derive(Debug, Clone, Default)]
pub struct RevisionFilter {
    /// Only revisions scheduled exactly on this date
    pub scheduled_on: Option<civil::Date>,

    /// Only revisions in this status
    pub status: Option<RevisionStatus>,
}

impl RevisionFilter {
    /// Build a filter from free-text date and status values.
    ///
    /// Under [`Leniency::Lenient`], values that fail to parse are dropped and
    /// logged; under [`Leniency::Strict`] they produce `InvalidInput`.
    pub fn from_raw(
        date: Option<&str>,
        status: Option<&str>,
        leniency: Leniency,
    ) -> crate::Result<Self> {
        let mut filter = Self::default();

        if let Some(raw) = date {
            match raw.parse::<civil::Date>() {
                Ok(date) => filter.scheduled_on = Some(date),
                Err(_) if leniency == Leniency::Lenient => {
                    log::warn!("ignoring unparseable date filter: {raw:?}");
                }
                Err(e) => {
                    return Err(crate::SchedulerError::invalid_input(
                        "date",
                        format!("Expected YYYY-MM-DD, got {raw:?}: {e}"),
                    ));
                }
            }
        }

        if let Some(raw) = status {
            match raw.parse::<RevisionStatus>() {
                Ok(status) => filter.status = Some(status),
                Err(_) if leniency == Leniency::Lenient => {
                    log::warn!("ignoring unparseable status filter: {raw:?}");
                }
                Err(reason) => {
                    return Err(crate::SchedulerError::invalid_input("status", reason));
                }
            }
        }

        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_filter_drops_bad_date() {
        let filter = RevisionFilter::from_raw(Some("not-a-date"), None, Leniency::Lenient)
            .expect("lenient parsing never fails");
        assert_eq!(filter.scheduled_on, None);
    }

    #[test]
    fn test_lenient_filter_keeps_good_values() {
        let filter =
            RevisionFilter::from_raw(Some("2024-01-10"), Some("pending"), Leniency::Lenient)
                .expect("lenient parsing never fails");
        assert_eq!(filter.scheduled_on, Some(civil::date(2024, 1, 10)));
        assert_eq!(filter.status, Some(RevisionStatus::Pending));
    }

    #[test]
    fn test_strict_filter_rejects_bad_date() {
        let result = RevisionFilter::from_raw(Some("2024-13-40"), None, Leniency::Strict);
        assert!(matches!(
            result,
            Err(crate::SchedulerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_strict_filter_rejects_bad_status() {
        let result = RevisionFilter::from_raw(None, Some("done"), Leniency::Strict);
        assert!(matches!(
            result,
            Err(crate::SchedulerError::InvalidInput { .. })
        ));
    }
}
