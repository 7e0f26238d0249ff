// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Months of the Gregorian year and the metadata derived from them.

use core::{fmt, str};

use chrono::TimeZone;

use crate::calendar::Calendar;
use crate::format::Described;
use crate::query::is_leap_year;

const DAYS_PER_WEEK: u32 = 7;

/// The year used when a month has to be turned into a date and the year does not matter.
const ARBITRARY_YEAR: i32 = 2000;

/// A month of the Gregorian year, numbered from January = 1 to December = 12.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[repr(u8)]
pub enum Month {
    /// January.
    January = 1,
    /// February.
    February = 2,
    /// March.
    March = 3,
    /// April.
    April = 4,
    /// May.
    May = 5,
    /// June.
    June = 6,
    /// July.
    July = 7,
    /// August.
    August = 8,
    /// September.
    September = 9,
    /// October.
    October = 10,
    /// November.
    November = 11,
    /// December.
    December = 12,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The 1-based number of the month, January = 1.
    #[inline]
    pub const fn number(&self) -> u32 {
        *self as u32
    }

    /// The month with the given 1-based number, or `None` outside `1..=12`.
    #[inline]
    pub const fn from_number(n: u32) -> Option<Month> {
        match n {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }

    /// The next month, wrapping from December to January.
    #[inline]
    #[must_use]
    pub const fn succ(&self) -> Month {
        match *self {
            Month::December => Month::January,
            _ => match Month::from_number(self.number() + 1) {
                Some(month) => month,
                None => Month::January,
            },
        }
    }

    /// The previous month, wrapping from January to December.
    #[inline]
    #[must_use]
    pub const fn pred(&self) -> Month {
        match *self {
            Month::January => Month::December,
            _ => match Month::from_number(self.number() - 1) {
                Some(month) => month,
                None => Month::December,
            },
        }
    }

    /// The English name of the month, independent of the formatting service.
    pub const fn english_name(&self) -> &'static str {
        match *self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// The number of days in this month of `year`.
    ///
    /// February has 29 days when [`is_leap_year`](crate::is_leap_year) holds for `year`, which is
    /// never the case for negative years.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_dateutils::Month;
    ///
    /// assert_eq!(Month::February.days_in(2024), 29);
    /// assert_eq!(Month::February.days_in(2023), 28);
    /// assert_eq!(Month::April.days_in(2023), 30);
    /// ```
    pub const fn days_in(&self, year: i32) -> u32 {
        match *self {
            Month::January
            | Month::March
            | Month::May
            | Month::July
            | Month::August
            | Month::October
            | Month::December => 31,
            Month::April | Month::June | Month::September | Month::November => 30,
            Month::February if is_leap_year(year) => 29,
            Month::February => 28,
        }
    }

    /// The full month name as rendered by the formatting service.
    ///
    /// The name is taken from a canonical date on the first of the month in an arbitrary year,
    /// which is fine because month names do not depend on the year. Returns an empty string if
    /// that date cannot be built.
    pub fn name(&self) -> String {
        match Calendar::local().canonical_date(1, self.number(), ARBITRARY_YEAR) {
            Some(date) => date.month_description(),
            None => {
                log::trace!("no canonical date for {:?}, empty month name", self);
                String::new()
            }
        }
    }

    /// The number of days in this month of the current year, asked of the calendar service.
    pub fn days_in_current_year(&self) -> Option<u32> {
        let calendar = Calendar::local();
        let year = calendar.fields(&calendar.now()).year;
        calendar.days_in_month(*self, year)
    }

    /// The number of Sunday-first calendar rows spanned by this month of `year`, counting from
    /// day `start_day`.
    ///
    /// See [`Calendar::number_of_weeks_in_month`]; this uses the system time zone.
    pub fn number_of_weeks(&self, year: i32, start_day: u32) -> Option<u32> {
        Calendar::local().number_of_weeks_in_month(*self, year, start_day)
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    /// The number of days in `month` of `year`, read from the day range of a date built in that
    /// month.
    pub fn days_in_month(&self, month: Month, year: i32) -> Option<u32> {
        let date = self.canonical_date(1, month.number(), year)?;
        let days = self.day_range_in_month(&date)?;
        Some(days.end - days.start)
    }

    /// The number of Sunday-first calendar rows spanned by `month` of `year`, starting at day
    /// `start_day`.
    ///
    /// This counts grid rows, not durations: a partial first or last week is a whole row. With
    /// `D` the weekday number (Sunday = 1) of `start_day`, the first row holds `7 - D + 1` days
    /// and every further row up to seven, so January 2024 (starting on a Monday) spans five
    /// rows. Returns `None` if `start_day` is not a day of the month.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Utc;
    /// use chrono_dateutils::{Calendar, Month};
    ///
    /// let calendar = Calendar::new(Utc);
    /// assert_eq!(calendar.number_of_weeks_in_month(Month::January, 2024, 1), Some(5));
    /// assert_eq!(calendar.number_of_weeks_in_month(Month::February, 2015, 1), Some(4));
    /// assert_eq!(calendar.number_of_weeks_in_month(Month::February, 2015, 30), None);
    /// ```
    pub fn number_of_weeks_in_month(&self, month: Month, year: i32, start_day: u32) -> Option<u32> {
        let start = self.canonical_date(start_day, month.number(), year)?;
        let weekday = self.fields(&start).weekday.number();
        let days_in_first_week = DAYS_PER_WEEK - weekday + 1;
        let total = month.days_in(year);
        let extra_weeks = if total > days_in_first_week {
            (total - days_in_first_week + DAYS_PER_WEEK - 1) / DAYS_PER_WEEK
        } else {
            0
        };
        Some(extra_weeks + 1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl From<Month> for chrono::Month {
    #[inline]
    fn from(month: Month) -> chrono::Month {
        match month {
            Month::January => chrono::Month::January,
            Month::February => chrono::Month::February,
            Month::March => chrono::Month::March,
            Month::April => chrono::Month::April,
            Month::May => chrono::Month::May,
            Month::June => chrono::Month::June,
            Month::July => chrono::Month::July,
            Month::August => chrono::Month::August,
            Month::September => chrono::Month::September,
            Month::October => chrono::Month::October,
            Month::November => chrono::Month::November,
            Month::December => chrono::Month::December,
        }
    }
}

impl From<chrono::Month> for Month {
    #[inline]
    fn from(month: chrono::Month) -> Month {
        match month {
            chrono::Month::January => Month::January,
            chrono::Month::February => Month::February,
            chrono::Month::March => Month::March,
            chrono::Month::April => Month::April,
            chrono::Month::May => Month::May,
            chrono::Month::June => Month::June,
            chrono::Month::July => Month::July,
            chrono::Month::August => Month::August,
            chrono::Month::September => Month::September,
            chrono::Month::October => Month::October,
            chrono::Month::November => Month::November,
            chrono::Month::December => Month::December,
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = OutOfRangeMonth;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Month::from_number(u32::from(value)).ok_or(OutOfRangeMonth(value))
    }
}

/// Any month can be represented as an integer from 1 to 12, which equals [`Month::number`].
impl num_traits::FromPrimitive for Month {
    #[inline]
    fn from_i64(n: i64) -> Option<Month> {
        u32::try_from(n).ok().and_then(Month::from_number)
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Month> {
        u32::try_from(n).ok().and_then(Month::from_number)
    }
}

/// Parses full (`"January"`) or three-letter (`"Jan"`) month names, ignoring ASCII case.
impl str::FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .iter()
            .copied()
            .find(|month| {
                let name = month.english_name();
                s.eq_ignore_ascii_case(name) || s.eq_ignore_ascii_case(&name[..3])
            })
            .ok_or(ParseMonthError { _dummy: () })
    }
}

/// The error returned when converting a number outside `1..=12` into a [`Month`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OutOfRangeMonth(u8);

impl fmt::Display for OutOfRangeMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "month number {} out of range 1..=12", self.0)
    }
}

impl std::error::Error for OutOfRangeMonth {}

/// An error resulting from reading `Month` value with `FromStr`.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseMonthError {
    _dummy: (),
}

impl std::error::Error for ParseMonthError {}

impl fmt::Display for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid month name")
    }
}

impl fmt::Debug for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseMonthError {{ .. }}")
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod month_serde {
    use super::Month;
    use core::fmt;
    use serde::{de, ser};

    impl ser::Serialize for Month {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.collect_str(&self)
        }
    }

    struct MonthVisitor;

    impl<'de> de::Visitor<'de> for MonthVisitor {
        type Value = Month;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("Month")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value.parse().map_err(|_| E::custom("short or long month names expected"))
        }
    }

    impl<'de> de::Deserialize<'de> for Month {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            deserializer.deserialize_str(MonthVisitor)
        }
    }

    #[test]
    fn test_serde_round_names() {
        assert_eq!(serde_json::to_string(&Month::March).unwrap(), "\"March\"");
        assert_eq!(serde_json::from_str::<Month>("\"sep\"").unwrap(), Month::September);
        serde_json::from_str::<Month>("\"Sept\"").unwrap_err();
    }
}
