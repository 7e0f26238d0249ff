// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! The Gregorian calendar service every other module goes through.
//!
//! A [`Calendar`] pairs the proleptic Gregorian calendar of Chrono's naive types with a
//! [`TimeZone`]. It extracts local wall-clock fields from an instant and turns local fields back
//! into an instant, resolving daylight saving time transitions in one consistent way:
//!
//! - an ambiguous local time (the repeated hour when clocks fall back) resolves to the earliest
//!   of the two instants, unless the caller names the offset it prefers;
//! - a local time that does not exist (the skipped hour when clocks spring forward) is pushed
//!   forward by the length of the gap, so 02:30 in a 02:00 → 03:00 gap becomes 03:30.

use core::ops::Range;

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Local, LocalResult, Months, NaiveDate, NaiveDateTime,
    NaiveTime, Offset, TimeDelta, TimeZone, Timelike, Utc,
};
use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Day;

static LOCAL_CALENDAR: Lazy<Calendar<Local>> = Lazy::new(|| Calendar::new(Local));

/// The era of a Gregorian year.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Era {
    /// Before the Common Era: proleptic years `0` and below.
    Bce,
    /// The Common Era: years `1` and above.
    Ce,
}

/// The local wall-clock decomposition of an instant.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarFields {
    /// The era of [`year`](#structfield.year).
    pub era: Era,
    /// The proleptic Gregorian year; year `0` is 1 BCE.
    pub year: i32,
    /// The month, `1..=12`.
    pub month: u32,
    /// The day of the month, `1..=31`.
    pub day: u32,
    /// The hour, `0..=23`.
    pub hour: u32,
    /// The minute, `0..=59`.
    pub minute: u32,
    /// The second, `0..=59`. A leap second reads as `59`.
    pub second: u32,
    /// The day of the week.
    pub weekday: Day,
}

impl CalendarFields {
    fn from_naive(local: &NaiveDateTime) -> CalendarFields {
        let (ce, _) = local.year_ce();
        CalendarFields {
            era: if ce { Era::Ce } else { Era::Bce },
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
            weekday: Day::from(local.weekday()),
        }
    }

    /// Keeps the year, month and day and drops the time of day.
    #[inline]
    pub const fn date_fields(&self) -> PartialFields {
        PartialFields::ymd(self.year, self.month, self.day)
    }
}

/// A partial set of local fields used to build an instant.
///
/// Missing date fields default to `1` (January 1 of year 1) and missing time fields default to
/// `0`, so a set with only a date resolves to the start of that day.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, Hash)]
pub struct PartialFields {
    /// The proleptic Gregorian year.
    pub year: Option<i32>,
    /// The month, `1..=12`.
    pub month: Option<u32>,
    /// The day of the month.
    pub day: Option<u32>,
    /// The hour.
    pub hour: Option<u32>,
    /// The minute.
    pub minute: Option<u32>,
    /// The second.
    pub second: Option<u32>,
}

impl PartialFields {
    /// Fields naming a date and no time of day.
    #[inline]
    pub const fn ymd(year: i32, month: u32, day: u32) -> PartialFields {
        PartialFields {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: None,
            minute: None,
            second: None,
        }
    }

    /// Replaces the time of day.
    #[inline]
    #[must_use]
    pub const fn with_time(self, hour: u32, minute: u32, second: u32) -> PartialFields {
        PartialFields { hour: Some(hour), minute: Some(minute), second: Some(second), ..self }
    }
}

/// The Gregorian calendar in a given time zone.
///
/// All methods are pure. The process-wide calendar of the system time zone is available through
/// [`Calendar::local`].
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_dateutils::{Calendar, PartialFields};
///
/// let calendar = Calendar::new(Utc);
/// let dt = calendar.construct(&PartialFields::ymd(2024, 2, 29).with_time(8, 15, 0)).unwrap();
/// assert_eq!(dt, Utc.with_ymd_and_hms(2024, 2, 29, 8, 15, 0).unwrap());
/// assert_eq!(calendar.day_range_in_month(&dt), Some(1..30));
/// ```
#[derive(Clone, Debug)]
pub struct Calendar<Tz: TimeZone> {
    tz: Tz,
}

impl Calendar<Local> {
    /// The shared calendar of the system time zone, initialized on first use.
    #[inline]
    pub fn local() -> &'static Calendar<Local> {
        &LOCAL_CALENDAR
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    /// Makes a calendar reading and building instants in `tz`.
    #[inline]
    pub fn new(tz: Tz) -> Calendar<Tz> {
        Calendar { tz }
    }

    /// The time zone of this calendar.
    #[inline]
    pub fn timezone(&self) -> Tz {
        self.tz.clone()
    }

    /// The current instant, expressed in this calendar's time zone.
    #[inline]
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    /// Extracts the local wall-clock fields of `dt`.
    pub fn fields(&self, dt: &DateTime<Tz>) -> CalendarFields {
        CalendarFields::from_naive(&dt.with_timezone(&self.tz).naive_local())
    }

    /// Builds the instant named by `fields`.
    ///
    /// Returns `None` when a field is out of range (for example February 30) or the resulting
    /// local time cannot be represented.
    pub fn construct(&self, fields: &PartialFields) -> Option<DateTime<Tz>> {
        self.resolve(&Self::naive_from(fields)?)
    }

    /// Like [`construct`](Calendar::construct), but an ambiguous local time resolves to the
    /// instant with offset `preferred` when there is one.
    pub(crate) fn construct_preferring(
        &self,
        fields: &PartialFields,
        preferred: FixedOffset,
    ) -> Option<DateTime<Tz>> {
        let local = Self::naive_from(fields)?;
        self.resolve_preferring(&local, Some(preferred))
    }

    fn naive_from(fields: &PartialFields) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            fields.year.unwrap_or(1),
            fields.month.unwrap_or(1),
            fields.day.unwrap_or(1),
        )?;
        let time = NaiveTime::from_hms_opt(
            fields.hour.unwrap_or(0),
            fields.minute.unwrap_or(0),
            fields.second.unwrap_or(0),
        )?;
        Some(date.and_time(time))
    }

    /// Builds the instant at local `time` on `date`.
    #[inline]
    pub fn date_from(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
        self.resolve(&date.and_time(time))
    }

    /// Adds `days` calendar days to `dt`, keeping its wall-clock time where it exists.
    ///
    /// A calendar day is not a fixed duration: across a daylight saving transition the result is
    /// 23 or 25 hours away from `dt`. A result in a repeated hour keeps the offset of `dt` when
    /// it can.
    pub fn add_days(&self, dt: &DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
        let dt = dt.with_timezone(&self.tz);
        let local = dt.naive_local();
        let shifted = if days < 0 {
            local.checked_sub_days(Days::new(days.unsigned_abs()))?
        } else {
            local.checked_add_days(Days::new(days.unsigned_abs()))?
        };
        self.resolve_preferring(&shifted, Some(dt.offset().fix()))
    }

    /// The valid day numbers of the month containing `dt`, e.g. `1..32` for January.
    pub fn day_range_in_month(&self, dt: &DateTime<Tz>) -> Option<Range<u32>> {
        let first = dt.with_timezone(&self.tz).date_naive().with_day(1)?;
        let next = first.checked_add_months(Months::new(1))?;
        let days = u32::try_from(next.signed_duration_since(first).num_days()).ok()?;
        Some(1..days + 1)
    }

    /// The number of whole calendar days from `from` to `to`.
    ///
    /// The difference is measured on local wall-clock time and is negative when `to` precedes
    /// `from`. Partial days are truncated toward zero: 12:00 on one day to 11:00 on the next is
    /// `0` days.
    pub fn day_difference(&self, from: &DateTime<Tz>, to: &DateTime<Tz>) -> Option<i64> {
        let from = from.with_timezone(&self.tz).naive_local();
        let to = to.with_timezone(&self.tz).naive_local();
        let mut days = to.date().signed_duration_since(from.date()).num_days();
        if days > 0 && to.time() < from.time() {
            days -= 1;
        } else if days < 0 && to.time() > from.time() {
            days += 1;
        }
        Some(days)
    }

    fn resolve(&self, local: &NaiveDateTime) -> Option<DateTime<Tz>> {
        self.resolve_preferring(local, None)
    }

    fn resolve_preferring(
        &self,
        local: &NaiveDateTime,
        preferred: Option<FixedOffset>,
    ) -> Option<DateTime<Tz>> {
        match self.tz.from_local_datetime(local) {
            LocalResult::Single(dt) => Some(dt),
            LocalResult::Ambiguous(earliest, latest) => {
                if preferred == Some(latest.offset().fix()) {
                    Some(latest)
                } else {
                    Some(earliest)
                }
            }
            LocalResult::None => self.skip_gap(local),
        }
    }

    // `local` falls in a spring-forward gap: read it with the offset in force before the
    // transition, which lands the same distance past the end of the gap.
    fn skip_gap(&self, local: &NaiveDateTime) -> Option<DateTime<Tz>> {
        let before = local.checked_sub_signed(TimeDelta::days(1))?;
        let offset = self.tz.offset_from_local_datetime(&before).earliest()?.fix();
        let utc =
            local.checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
        log::trace!("local time {} skipped by a transition, resolved through {}", local, offset);
        Some(self.tz.from_utc_datetime(&utc))
    }
}
