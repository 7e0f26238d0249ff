// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Field queries and comparisons on the local calendar date of a timestamp.

use core::cmp::Ordering;

use chrono::{DateTime, TimeZone};

use crate::calendar::Calendar;
use crate::canonical::Canonical;
use crate::Day;

/// Whether `year` is a Gregorian leap year.
///
/// Divisible by 4, except centuries, except again every fourth century. Negative years are never
/// leap years.
///
/// # Example
///
/// ```
/// use chrono_dateutils::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// assert!(!is_leap_year(-4));
/// ```
pub const fn is_leap_year(year: i32) -> bool {
    if year < 0 {
        return false;
    }
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Extension trait reading calendar fields of a timestamp in its own time zone.
///
/// The `is_in_same_*` comparisons look at plain field values and need no canonicalization.
pub trait CalendarQuery {
    /// The proleptic Gregorian year.
    fn year_number(&self) -> i32;

    /// The month, January = 1.
    fn month_number(&self) -> u32;

    /// The day of the month, starting at 1.
    fn day_number_within_month(&self) -> u32;

    /// The day of the week.
    fn day_of_week(&self) -> Day;

    /// The day of the week numbered from Sunday = 1 to Saturday = 7.
    fn weekday_number(&self) -> u32 {
        self.day_of_week().number()
    }

    /// Whether the year of this timestamp is a leap year.
    fn is_leap_year(&self) -> bool {
        is_leap_year(self.year_number())
    }

    /// Whether the canonical form of this timestamp falls on a Saturday or Sunday, or `None` if
    /// it cannot be canonicalized.
    fn try_is_on_weekend(&self) -> Option<bool>;

    /// Whether this timestamp falls on a Saturday or Sunday.
    ///
    /// A failed canonicalization reads as `false`.
    fn is_on_weekend(&self) -> bool {
        self.try_is_on_weekend().unwrap_or_else(|| {
            log::trace!("weekend check could not canonicalize, reporting false");
            false
        })
    }

    /// Same day of the month, in any month.
    fn is_on_same_day_of_month(&self, other: &Self) -> bool {
        self.day_number_within_month() == other.day_number_within_month()
    }

    /// Same month of the same year.
    fn is_in_same_month_same_year(&self, other: &Self) -> bool {
        self.month_number() == other.month_number() && self.year_number() == other.year_number()
    }

    /// Same month, in any year.
    fn is_in_same_month_any_year(&self, other: &Self) -> bool {
        self.month_number() == other.month_number()
    }

    /// Same year.
    fn is_in_same_year(&self, other: &Self) -> bool {
        self.year_number() == other.year_number()
    }

    /// Whether comparing `self` to `other` yields `ordering`.
    fn compare_against(&self, other: &Self, ordering: Ordering) -> bool;

    /// The same instant.
    fn is_same(&self, other: &Self) -> bool {
        self.compare_against(other, Ordering::Equal)
    }

    /// A later instant than `other`.
    fn is_greater(&self, other: &Self) -> bool {
        self.compare_against(other, Ordering::Greater)
    }

    /// An earlier instant than `other`.
    fn is_less(&self, other: &Self) -> bool {
        self.compare_against(other, Ordering::Less)
    }
}

impl<Tz: TimeZone> CalendarQuery for DateTime<Tz> {
    fn year_number(&self) -> i32 {
        Calendar::new(self.timezone()).fields(self).year
    }

    fn month_number(&self) -> u32 {
        Calendar::new(self.timezone()).fields(self).month
    }

    fn day_number_within_month(&self) -> u32 {
        Calendar::new(self.timezone()).fields(self).day
    }

    fn day_of_week(&self) -> Day {
        Calendar::new(self.timezone()).fields(self).weekday
    }

    fn try_is_on_weekend(&self) -> Option<bool> {
        Some(self.to_canonical()?.day_of_week().is_weekend())
    }

    fn compare_against(&self, other: &Self, ordering: Ordering) -> bool {
        self.cmp(other) == ordering
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use chrono::{FixedOffset, TimeDelta, TimeZone, Utc};
    use chrono_tz::America::New_York;

    use super::{is_leap_year, CalendarQuery};
    use crate::Day;

    #[test]
    fn test_is_leap_year() {
        for year in [2000, 2024, 1600, 2400, 4, 0] {
            assert!(is_leap_year(year), "{} is a leap year", year);
        }
        for year in [1900, 2023, 2100, 1800, 1] {
            assert!(!is_leap_year(year), "{} is not a leap year", year);
        }
        for year in [-1, -4, -100, -400, i32::MIN] {
            assert!(!is_leap_year(year), "negative year {}", year);
        }
    }

    #[test]
    fn test_is_leap_year_agrees_with_chrono() {
        for year in 0..=2500 {
            let feb_29 = chrono::NaiveDate::from_ymd_opt(year, 2, 29);
            assert_eq!(is_leap_year(year), feb_29.is_some(), "{}", year);
        }
    }

    #[test]
    fn test_fields() {
        let dt = Utc.with_ymd_and_hms(2024, 9, 14, 3, 0, 0).unwrap();
        assert_eq!(dt.year_number(), 2024);
        assert_eq!(dt.month_number(), 9);
        assert_eq!(dt.day_number_within_month(), 14);
        assert_eq!(dt.day_of_week(), Day::Saturday);
        assert_eq!(dt.weekday_number(), 7);
        assert!(dt.is_leap_year());

        // the same instant is still September 13 in New York
        let ny = dt.with_timezone(&New_York);
        assert_eq!(ny.day_number_within_month(), 13);
        assert_eq!(ny.weekday_number(), 6);
    }

    #[test]
    fn test_weekday_numbers_from_sunday() {
        // 2024-09-08 is a Sunday
        let sunday = Utc.with_ymd_and_hms(2024, 9, 8, 12, 0, 0).unwrap();
        for n in 0..7 {
            let dt = sunday + TimeDelta::days(n);
            assert_eq!(i64::from(dt.weekday_number()), n + 1);
        }
    }

    #[test]
    fn test_is_on_weekend() {
        let zone = FixedOffset::east_opt(5 * 3600).unwrap();
        let expected = [true, false, false, false, false, false, true];
        for (n, weekend) in expected.iter().enumerate() {
            // 2024-09-08 is a Sunday
            let dt = zone.with_ymd_and_hms(2024, 9, 8 + n as u32, 23, 30, 0).unwrap();
            assert_eq!(dt.is_on_weekend(), *weekend);
            assert_eq!(dt.try_is_on_weekend(), Some(*weekend));
        }
    }

    #[test]
    fn test_same_field_comparisons() {
        let a = Utc.with_ymd_and_hms(2024, 5, 17, 1, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2023, 5, 17, 23, 0, 0).unwrap();
        let c = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
        let d = Utc.with_ymd_and_hms(2024, 6, 17, 12, 0, 0).unwrap();

        assert!(a.is_on_same_day_of_month(&b));
        assert!(a.is_on_same_day_of_month(&d));
        assert!(!a.is_on_same_day_of_month(&c));

        assert!(a.is_in_same_month_same_year(&c));
        assert!(!a.is_in_same_month_same_year(&b));
        assert!(!a.is_in_same_month_same_year(&d));

        assert!(a.is_in_same_month_any_year(&b));
        assert!(!a.is_in_same_month_any_year(&d));

        assert!(a.is_in_same_year(&c));
        assert!(a.is_in_same_year(&d));
        assert!(!a.is_in_same_year(&b));
    }

    #[test]
    fn test_ordering() {
        let a = Utc.with_ymd_and_hms(2024, 5, 17, 1, 0, 0).unwrap();
        let b = a + TimeDelta::seconds(1);
        assert!(a.is_same(&a));
        assert!(!a.is_same(&b));
        assert!(b.is_greater(&a));
        assert!(!a.is_greater(&b));
        assert!(a.is_less(&b));
        assert!(!a.is_less(&a));
        assert!(a.compare_against(&b, Ordering::Less));
    }
}
