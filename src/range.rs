// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Closed ranges of timestamps and the day counts they span.

use core::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::{RangeError, RangeErrorKind};
use crate::shift::{today, DayShift};

/// The first instant of "all recorded history": 0001-01-01 00:00:00 UTC, in `tz`.
pub fn distant_past<Tz: TimeZone>(tz: &Tz) -> Option<DateTime<Tz>> {
    Some(Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).single()?.with_timezone(tz))
}

/// A closed range `[start, end]` of timestamps with `start <= end`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_dateutils::DateRange;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 5, 17, 0, 0).unwrap();
/// let range = DateRange::new(start, end)?;
/// assert_eq!(range.number_of_days_between_inclusive(), Some(5));
/// assert_eq!(range.number_of_days_between_exclusive(), Some(3));
/// assert!(DateRange::new(end, start).is_err());
/// # Ok::<(), chrono_dateutils::RangeError>(())
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "DateTime<Tz>: serde::Serialize")))]
pub struct DateRange<Tz: TimeZone> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl<Tz: TimeZone> DateRange<Tz> {
    /// Makes the range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeErrorKind::InvalidRange`] if `start` comes after `end`. Equal endpoints are
    /// fine.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Self, RangeError> {
        if start > end {
            log::debug!("refusing range starting at {:?} after its end {:?}", start, end);
            return Err(RangeErrorKind::InvalidRange.into());
        }
        Ok(DateRange { start, end })
    }

    /// Makes the range `[start, end]`, or `None` if `start` comes after `end`.
    #[inline]
    pub fn checked(start: DateTime<Tz>, end: DateTime<Tz>) -> Option<Self> {
        Self::new(start, end).ok()
    }

    /// The `count` days of history ending with the day of `end`.
    ///
    /// The range starts `count - 1` calendar days before `end`, at the same time of day, so it
    /// touches exactly `count` days. A `count` of zero gives the single-instant range
    /// `[end, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeErrorKind::NegativeCount`] for a negative `count` and
    /// [`RangeErrorKind::Indeterminate`] if the start cannot be computed.
    pub fn days_of_history(count: i64, end: DateTime<Tz>) -> Result<Self, RangeError> {
        if count < 0 {
            return Err(RangeErrorKind::NegativeCount.into());
        }
        if count == 0 {
            return Self::new(end.clone(), end);
        }
        let start = end.shifted_to_past(count - 1).ok_or_else(|| {
            log::debug!("no start for {} days of history ending {:?}", count, end);
            RangeError::new(RangeErrorKind::Indeterminate)
        })?;
        Self::new(start, end)
    }

    /// The first instant of the range.
    #[inline]
    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    /// The last instant of the range.
    #[inline]
    pub fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    /// Whether `dt` lies within the range, endpoints included.
    #[inline]
    pub fn contains<Tz2: TimeZone>(&self, dt: &DateTime<Tz2>) -> bool {
        self.start <= *dt && *dt <= self.end
    }

    /// The number of local days the range touches, both endpoint days included.
    ///
    /// Days are local dates in the time zone of the start; the end is read in that zone too.
    /// Only the dates count, so `[Jan 1 23:00, Jan 2 01:00]` touches two days, including on a
    /// day whose midnight is skipped by a transition.
    pub fn number_of_days_between_inclusive(&self) -> Option<i64> {
        let start = self.start.date_naive();
        let end = self.end.with_timezone(&self.start.timezone()).date_naive();
        // measured from the end back to the start: never positive for a valid range
        let days = start.signed_duration_since(end).num_days();
        Some(days.abs() + 1)
    }

    /// The number of local days strictly between the endpoint days.
    ///
    /// A range within a single day has no days strictly inside it, so this is `0` for it.
    pub fn number_of_days_between_exclusive(&self) -> Option<i64> {
        match self.number_of_days_between_inclusive()? {
            0 | 1 => Some(0),
            days => Some(days - 2),
        }
    }
}

impl DateRange<Local> {
    /// The range `[now, now]` in the system time zone.
    pub fn today() -> Self {
        let today = today();
        DateRange { start: today.clone(), end: today }
    }

    /// The range from [`distant_past`] to now, in the system time zone.
    pub fn all_history() -> Option<Self> {
        Self::checked(distant_past(&Local)?, today())
    }
}

impl<Tz: TimeZone, Tz2: TimeZone> PartialEq<DateRange<Tz2>> for DateRange<Tz> {
    fn eq(&self, other: &DateRange<Tz2>) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<Tz: TimeZone> Eq for DateRange<Tz> {}

impl<Tz: TimeZone> fmt::Display for DateRange<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de, Tz: TimeZone> serde::Deserialize<'de> for DateRange<Tz>
where
    DateTime<Tz>: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(bound(deserialize = "DateTime<T>: serde::Deserialize<'de>"))]
        struct Endpoints<T: TimeZone> {
            start: DateTime<T>,
            end: DateTime<T>,
        }

        let Endpoints { start, end } = Endpoints::<Tz>::deserialize(deserializer)?;
        DateRange::new(start, end).map_err(serde::de::Error::custom)
    }
}
