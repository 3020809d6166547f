//! Timezone-aware "current moment" resolution.

use jiff::{Timestamp, tz::TimeZone};

use crate::domain::{menu::errors::MenuServiceError, schedule::TimeOfDay};

/// An instant projected onto a timezone's civil wall clock: the local
/// day of week (0 = Sunday through 6 = Saturday) and the local time
/// truncated to the minute.
///
/// The local day can differ from the UTC day near midnight; promotions
/// are gated on what the restaurant's clock says, so that is the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    pub day: u8,
    pub time: TimeOfDay,
}

impl LocalMoment {
    /// Projects `now` into the given IANA timezone.
    ///
    /// # Errors
    ///
    /// Returns [`MenuServiceError::InvalidTimezone`] when `timezone` is
    /// not a recognized IANA identifier.
    pub fn resolve(now: Timestamp, timezone: &str) -> Result<Self, MenuServiceError> {
        let tz = TimeZone::get(timezone)
            .map_err(|_| MenuServiceError::InvalidTimezone(timezone.to_string()))?;

        let zoned = now.to_zoned(tz);

        Ok(Self {
            day: zoned.weekday().to_sunday_zero_offset() as u8,
            time: TimeOfDay::from_clock(zoned.hour() as u8, zoned.minute() as u8),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    /// Monday 2025-01-06 23:30 in São Paulo (UTC-3), i.e. already Tuesday
    /// 02:30 in UTC.
    fn monday_late_evening() -> TestResult<Timestamp> {
        Ok(date(2025, 1, 6)
            .at(23, 30, 0, 0)
            .in_tz("America/Sao_Paulo")?
            .timestamp())
    }

    #[test]
    fn projects_into_the_requested_zone() -> TestResult {
        let moment = LocalMoment::resolve(monday_late_evening()?, "America/Sao_Paulo")?;

        assert_eq!(moment.day, 1);
        assert_eq!(moment.time.to_string(), "23:30");

        Ok(())
    }

    #[test]
    fn local_day_can_differ_from_utc_day() -> TestResult {
        let now = monday_late_evening()?;

        let utc = LocalMoment::resolve(now, "UTC")?;
        assert_eq!(utc.day, 2);
        assert_eq!(utc.time.to_string(), "02:30");

        let tokyo = LocalMoment::resolve(now, "Asia/Tokyo")?;
        assert_eq!(tokyo.day, 2);
        assert_eq!(tokyo.time.to_string(), "11:30");

        Ok(())
    }

    #[test]
    fn seconds_are_truncated() -> TestResult {
        let now = date(2025, 1, 8)
            .at(19, 0, 59, 0)
            .in_tz("UTC")?
            .timestamp();

        let moment = LocalMoment::resolve(now, "UTC")?;

        assert_eq!(moment.day, 3);
        assert_eq!(moment.time.to_string(), "19:00");

        Ok(())
    }

    #[test]
    fn unknown_timezone_is_rejected() -> TestResult {
        let result = LocalMoment::resolve(monday_late_evening()?, "America/Springfield");

        assert!(
            matches!(result, Err(MenuServiceError::InvalidTimezone(_))),
            "expected InvalidTimezone, got {result:?}"
        );

        Ok(())
    }
}
