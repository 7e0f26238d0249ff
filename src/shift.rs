// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Day arithmetic that stays on the local wall clock.
//!
//! Adding `n * 24` hours to an instant is wrong whenever a daylight saving transition sits in
//! between: the result lands an hour early or late on the wall clock. Shifting here is done in
//! calendar days instead. The candidate day comes from calendar-day addition, and the original
//! hour, minute and second are then put back on it.

use chrono::{DateTime, Local, Offset, TimeDelta, TimeZone};

use crate::calendar::Calendar;

/// Extension trait shifting a timestamp by whole calendar days.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_dateutils::DayShift;
///
/// let dt = Utc.with_ymd_and_hms(2024, 2, 28, 21, 5, 0).unwrap();
/// assert_eq!(dt.next_day(), Utc.with_ymd_and_hms(2024, 2, 29, 21, 5, 0).single());
/// assert_eq!(dt.offset_days(-59), Utc.with_ymd_and_hms(2023, 12, 31, 21, 5, 0).single());
/// assert_eq!(dt.end_of_day(), Utc.with_ymd_and_hms(2024, 2, 28, 23, 59, 59).single());
/// ```
pub trait DayShift: Sized {
    /// The timestamp `days` calendar days away, at the same local hour, minute and second.
    ///
    /// `days` may be negative. Sub-second precision is dropped. When the wall-clock time does
    /// not exist on the target day it is pushed forward past the transition, see
    /// [`Calendar`](crate::Calendar). When it occurs twice, the occurrence with the offset of
    /// `self` wins, so `offset_days(0)` is always the same instant. Returns `None` if the result
    /// cannot be represented.
    fn offset_days(&self, days: i64) -> Option<Self>;

    /// `offset_days(1)`.
    fn next_day(&self) -> Option<Self> {
        self.offset_days(1)
    }

    /// `offset_days(-1)`.
    fn previous_day(&self) -> Option<Self> {
        self.offset_days(-1)
    }

    /// `offset_days(days)`.
    fn shifted_to_future(&self, days: i64) -> Option<Self> {
        self.offset_days(days)
    }

    /// `offset_days(-days)`.
    fn shifted_to_past(&self, days: i64) -> Option<Self> {
        self.offset_days(days.checked_neg()?)
    }

    /// The first instant of the local day, built from the year, month and day alone.
    ///
    /// This is usually midnight. In a zone whose clocks skip midnight it is the first instant
    /// after the skipped hour.
    fn start_of_day(&self) -> Option<Self>;

    /// The last whole second of the local day: one second before the start of the next day.
    fn end_of_day(&self) -> Option<Self>;
}

impl<Tz: TimeZone> DayShift for DateTime<Tz> {
    fn offset_days(&self, days: i64) -> Option<Self> {
        let calendar = Calendar::new(self.timezone());
        let candidate = calendar.add_days(self, days)?;
        let time = calendar.fields(self);
        let date = calendar.fields(&candidate).date_fields();
        let fields = date.with_time(time.hour, time.minute, time.second);
        calendar.construct_preferring(&fields, self.offset().fix())
    }

    fn start_of_day(&self) -> Option<Self> {
        let calendar = Calendar::new(self.timezone());
        calendar.construct(&calendar.fields(self).date_fields())
    }

    fn end_of_day(&self) -> Option<Self> {
        self.next_day()?.start_of_day()?.checked_sub_signed(TimeDelta::seconds(1))
    }
}

/// The current instant in the system time zone.
#[inline]
pub fn now() -> DateTime<Local> {
    Calendar::local().now()
}

/// The current instant in the system time zone; the same as [`now`].
#[inline]
pub fn today() -> DateTime<Local> {
    now()
}

/// [`today`] shifted one calendar day forward.
pub fn tomorrow() -> Option<DateTime<Local>> {
    today().next_day()
}

/// [`today`] shifted one calendar day back.
pub fn yesterday() -> Option<DateTime<Local>> {
    today().previous_day()
}

/// The number of whole calendar days from `start` to `end`, negative if `end` comes first.
///
/// The inputs are compared as they are, so 23:00 on one day to 01:00 on the next is `0` days.
/// Canonicalize both first (see [`Canonical`](crate::Canonical)) to count day boundaries
/// instead.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_dateutils::{difference_in_days, Canonical};
///
/// let late = Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap();
/// let early = Utc.with_ymd_and_hms(2024, 1, 2, 1, 0, 0).unwrap();
/// assert_eq!(difference_in_days(&late, &early), Some(0));
/// assert_eq!(
///     difference_in_days(&late.to_canonical().unwrap(), &early.to_canonical().unwrap()),
///     Some(1)
/// );
/// ```
pub fn difference_in_days<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Option<i64> {
    Calendar::new(start.timezone()).day_difference(start, end)
}
