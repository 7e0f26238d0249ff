// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Canonical times: one fixed time of day standing for the whole day.
//!
//! Two instants on the same local day can compare unequal for reasons that have nothing to do
//! with the day, including a daylight saving transition between them. Moving both to the
//! canonical time of day (12:01:00, well clear of midnight and of any transition hour) before
//! comparing makes day-level equality reliable.

use chrono::{DateTime, Local, NaiveTime, TimeZone};

use crate::calendar::{Calendar, PartialFields};
use crate::shift::today;

/// The hour of the canonical time of day.
pub const CANONICAL_HOUR: u32 = 12;
/// The minute of the canonical time of day.
pub const CANONICAL_MINUTE: u32 = 1;
/// The second of the canonical time of day.
pub const CANONICAL_SECOND: u32 = 0;

/// The canonical time of day, 12:01:00.
pub const CANONICAL_TIME: NaiveTime = match NaiveTime::from_hms_opt(
    CANONICAL_HOUR,
    CANONICAL_MINUTE,
    CANONICAL_SECOND,
) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// Extension trait moving a timestamp to a fixed local time of day on the same day.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_dateutils::Canonical;
///
/// let morning = Utc.with_ymd_and_hms(2024, 5, 17, 6, 30, 0).unwrap();
/// let evening = Utc.with_ymd_and_hms(2024, 5, 17, 22, 45, 10).unwrap();
/// assert_eq!(morning.to_canonical(), Utc.with_ymd_and_hms(2024, 5, 17, 12, 1, 0).single());
/// assert!(morning.is_same_day(&evening));
/// ```
pub trait Canonical: Sized {
    /// The same local date at `hour:minute:second`.
    ///
    /// Returns `None` if the time is out of range or cannot be represented.
    fn at_time(&self, hour: u32, minute: u32, second: u32) -> Option<Self>;

    /// The same local date at the canonical time of day.
    fn to_canonical(&self) -> Option<Self> {
        self.at_time(CANONICAL_HOUR, CANONICAL_MINUTE, CANONICAL_SECOND)
    }

    /// Whether `self` and `other` fall on the same local day, or `None` if either cannot be
    /// canonicalized.
    fn try_is_same_day(&self, other: &Self) -> Option<bool>;

    /// Whether `self` and `other` fall on the same local day.
    ///
    /// A failed canonicalization reads as `false`; use
    /// [`try_is_same_day`](Canonical::try_is_same_day) to tell the two apart.
    fn is_same_day(&self, other: &Self) -> bool {
        self.try_is_same_day(other).unwrap_or_else(|| {
            log::trace!("same-day comparison could not canonicalize, reporting false");
            false
        })
    }

    /// Whether `self` falls on the current local day, or `None` if it cannot be determined.
    fn try_is_today(&self) -> Option<bool>;

    /// Whether `self` falls on the current local day.
    ///
    /// A failed canonicalization reads as `false`.
    fn is_today(&self) -> bool {
        self.try_is_today().unwrap_or_else(|| {
            log::trace!("today check could not canonicalize, reporting false");
            false
        })
    }
}

impl<Tz: TimeZone> Canonical for DateTime<Tz> {
    fn at_time(&self, hour: u32, minute: u32, second: u32) -> Option<Self> {
        let calendar = Calendar::new(self.timezone());
        calendar.construct(&calendar.fields(self).date_fields().with_time(hour, minute, second))
    }

    fn try_is_same_day(&self, other: &Self) -> Option<bool> {
        Some(self.to_canonical()? == other.to_canonical()?)
    }

    fn try_is_today(&self) -> Option<bool> {
        let now = Calendar::new(self.timezone()).now();
        Some(self.to_canonical()? == now.to_canonical()?)
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    /// The instant at the canonical time of day on `year-month-day`.
    ///
    /// Returns `None` for a date that does not exist.
    pub fn canonical_date(&self, day: u32, month: u32, year: i32) -> Option<DateTime<Tz>> {
        self.construct(&PartialFields::ymd(year, month, day).with_time(
            CANONICAL_HOUR,
            CANONICAL_MINUTE,
            CANONICAL_SECOND,
        ))
    }
}

/// The canonical time of `year-month-day` in the system time zone.
pub fn create_canonical_date(day: u32, month: u32, year: i32) -> Option<DateTime<Local>> {
    Calendar::local().canonical_date(day, month, year)
}

/// Today at the canonical time of day, in the system time zone.
pub fn canonical_today() -> Option<DateTime<Local>> {
    today().to_canonical()
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Offset, TimeDelta, TimeZone, Timelike, Utc};
    use chrono_tz::America::New_York;

    use super::{canonical_today, create_canonical_date, Canonical, CANONICAL_TIME};
    use crate::calendar::Calendar;
    use crate::shift::DayShift;

    #[test]
    fn test_canonical_time() {
        assert_eq!(CANONICAL_TIME.to_string(), "12:01:00");
    }

    #[test]
    fn test_to_canonical() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let canonical = dt.to_canonical().unwrap();
        assert_eq!(canonical, Utc.with_ymd_and_hms(2023, 12, 31, 12, 1, 0).unwrap());
        assert_eq!(canonical.time(), CANONICAL_TIME);
    }

    #[test]
    fn test_to_canonical_drops_subseconds() {
        let dt = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + TimeDelta::milliseconds(5);
        assert_eq!(dt.to_canonical().unwrap().nanosecond(), 0);
    }

    #[test]
    fn test_to_canonical_idempotent() {
        let zone = FixedOffset::west_opt(7 * 3600).unwrap();
        let mut dt = zone.with_ymd_and_hms(2020, 2, 27, 3, 4, 5).unwrap();
        for _ in 0..5 {
            let once = dt.to_canonical().unwrap();
            assert_eq!(once.to_canonical(), Some(once));
            dt = dt.offset_days(1).unwrap();
        }
        let dt = New_York.with_ymd_and_hms(2024, 3, 10, 0, 30, 0).unwrap();
        let once = dt.to_canonical().unwrap();
        assert_eq!(once.to_canonical(), Some(once));
    }

    #[test]
    fn test_at_time() {
        let dt = Utc.with_ymd_and_hms(2024, 7, 4, 9, 0, 0).unwrap();
        assert_eq!(dt.at_time(18, 30, 15), Utc.with_ymd_and_hms(2024, 7, 4, 18, 30, 15).single());
        assert_eq!(dt.at_time(24, 0, 0), None);
        assert_eq!(dt.at_time(12, 60, 0), None);
    }

    #[test]
    fn test_is_same_day() {
        let early = Utc.with_ymd_and_hms(2024, 7, 4, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 7, 4, 23, 59, 59).unwrap();
        let next = Utc.with_ymd_and_hms(2024, 7, 5, 0, 0, 0).unwrap();
        assert!(early.is_same_day(&early));
        assert!(early.is_same_day(&late));
        assert!(late.is_same_day(&early));
        assert!(!late.is_same_day(&next));
        assert_eq!(late.try_is_same_day(&next), Some(false));
    }

    #[test]
    fn test_is_same_day_across_transition() {
        // 2024-03-10 is 23 hours long in New York
        let before = New_York.with_ymd_and_hms(2024, 3, 10, 1, 15, 0).unwrap();
        let after = New_York.with_ymd_and_hms(2024, 3, 10, 23, 45, 0).unwrap();
        assert_ne!(before.offset().fix(), after.offset().fix());
        assert!(before.is_same_day(&after));
        assert!(!before.is_same_day(&after.next_day().unwrap()));
    }

    #[test]
    fn test_is_same_day_in_value_zone() {
        let zone = FixedOffset::east_opt(9 * 3600).unwrap();
        // days are read in +09:00, where 16:00 UTC is already July 5
        let local = zone.with_ymd_and_hms(2024, 7, 4, 23, 0, 0).unwrap();
        let utc_noon = Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap().with_timezone(&zone);
        assert!(local.is_same_day(&utc_noon));
        let utc_evening = Utc.with_ymd_and_hms(2024, 7, 4, 16, 0, 0).unwrap().with_timezone(&zone);
        assert!(!local.is_same_day(&utc_evening));
    }

    #[test]
    fn test_is_today() {
        let now = Utc::now();
        assert!(now.is_today() || !now.is_same_day(&Utc::now()));
        let far = Utc.with_ymd_and_hms(1999, 1, 1, 12, 0, 0).unwrap();
        assert!(!far.is_today());
        assert_eq!(far.try_is_today(), Some(false));
        assert!(canonical_today().is_some());
    }

    #[test]
    fn test_canonical_date() {
        let calendar = Calendar::new(New_York);
        let dt = calendar.canonical_date(10, 3, 2024).unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 1, 0));
        assert_eq!(calendar.canonical_date(31, 4, 2024), None);
        assert_eq!(create_canonical_date(29, 2, 2023), None);
        let local = create_canonical_date(29, 2, 2024).unwrap();
        assert_eq!(local.time(), CANONICAL_TIME);
    }
}
