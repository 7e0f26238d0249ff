use core::{fmt, str};

use chrono::Weekday;

/// The day of the week, numbered from Sunday = 1 to Saturday = 7.
///
/// Unlike [`chrono::Weekday`], which leaves the first day of the week to the context, a `Day`
/// always counts from Sunday, so its numbers and its `Ord` implementation follow the row order of
/// a Sunday-first calendar grid.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[repr(u8)]
pub enum Day {
    /// Sunday.
    Sunday = 1,
    /// Monday.
    Monday = 2,
    /// Tuesday.
    Tuesday = 3,
    /// Wednesday.
    Wednesday = 4,
    /// Thursday.
    Thursday = 5,
    /// Friday.
    Friday = 6,
    /// Saturday.
    Saturday = 7,
}

impl Day {
    /// All days in calendar order, starting at Sunday.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// The 1-based number of the day, Sunday = 1.
    ///
    /// `d`:          | `Sunday` | `Monday` | `Tuesday` | `Wednesday` | `Thursday` | `Friday` | `Saturday`
    /// ------------- | -------- | -------- | --------- | ----------- | ---------- | -------- | ----------
    /// `d.number()`: | 1        | 2        | 3         | 4           | 5          | 6        | 7
    #[inline]
    pub const fn number(&self) -> u32 {
        *self as u32
    }

    /// The day with the given 1-based number, or `None` outside `1..=7`.
    #[inline]
    pub const fn from_number(n: u32) -> Option<Day> {
        match n {
            1 => Some(Day::Sunday),
            2 => Some(Day::Monday),
            3 => Some(Day::Tuesday),
            4 => Some(Day::Wednesday),
            5 => Some(Day::Thursday),
            6 => Some(Day::Friday),
            7 => Some(Day::Saturday),
            _ => None,
        }
    }

    /// The next day, wrapping from Saturday to Sunday.
    #[inline]
    #[must_use]
    pub const fn succ(&self) -> Day {
        match *self {
            Day::Sunday => Day::Monday,
            Day::Monday => Day::Tuesday,
            Day::Tuesday => Day::Wednesday,
            Day::Wednesday => Day::Thursday,
            Day::Thursday => Day::Friday,
            Day::Friday => Day::Saturday,
            Day::Saturday => Day::Sunday,
        }
    }

    /// The previous day, wrapping from Sunday to Saturday.
    #[inline]
    #[must_use]
    pub const fn pred(&self) -> Day {
        match *self {
            Day::Sunday => Day::Saturday,
            Day::Monday => Day::Sunday,
            Day::Tuesday => Day::Monday,
            Day::Wednesday => Day::Tuesday,
            Day::Thursday => Day::Wednesday,
            Day::Friday => Day::Thursday,
            Day::Saturday => Day::Friday,
        }
    }

    /// Saturday or Sunday.
    #[inline]
    pub const fn is_weekend(&self) -> bool {
        matches!(*self, Day::Saturday | Day::Sunday)
    }

    /// The English name of the day.
    pub const fn name(&self) -> &'static str {
        match *self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Weekday> for Day {
    #[inline]
    fn from(weekday: Weekday) -> Day {
        match weekday {
            Weekday::Sun => Day::Sunday,
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
        }
    }
}

impl From<Day> for Weekday {
    #[inline]
    fn from(day: Day) -> Weekday {
        match day {
            Day::Sunday => Weekday::Sun,
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
        }
    }
}

impl TryFrom<u8> for Day {
    type Error = OutOfRangeDay;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Day::from_number(u32::from(value)).ok_or(OutOfRangeDay(value))
    }
}

/// Any day can be represented as an integer from 1 to 7, which equals [`Day::number`].
impl num_traits::FromPrimitive for Day {
    #[inline]
    fn from_i64(n: i64) -> Option<Day> {
        u32::try_from(n).ok().and_then(Day::from_number)
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Day> {
        u32::try_from(n).ok().and_then(Day::from_number)
    }
}

/// Parses full (`"Sunday"`) or three-letter (`"Sun"`) day names, ignoring ASCII case.
impl str::FromStr for Day {
    type Err = ParseDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .iter()
            .copied()
            .find(|day| {
                let name = day.name();
                s.eq_ignore_ascii_case(name) || s.eq_ignore_ascii_case(&name[..3])
            })
            .ok_or(ParseDayError { _dummy: () })
    }
}

/// The error returned when converting a number outside `1..=7` into a [`Day`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OutOfRangeDay(u8);

impl fmt::Display for OutOfRangeDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "day number {} out of range 1..=7", self.0)
    }
}

impl std::error::Error for OutOfRangeDay {}

/// An error resulting from reading `Day` value with `FromStr`.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseDayError {
    _dummy: (),
}

impl std::error::Error for ParseDayError {}

impl fmt::Display for ParseDayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid day name")
    }
}

impl fmt::Debug for ParseDayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseDayError {{ .. }}")
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod day_serde {
    use super::Day;
    use core::fmt;
    use serde::{de, ser};

    impl ser::Serialize for Day {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.collect_str(&self)
        }
    }

    struct DayVisitor;

    impl<'de> de::Visitor<'de> for DayVisitor {
        type Value = Day;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("Day")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value.parse().map_err(|_| E::custom("short or long day names expected"))
        }
    }

    impl<'de> de::Deserialize<'de> for Day {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            deserializer.deserialize_str(DayVisitor)
        }
    }

    #[test]
    fn test_serde_serialize() {
        assert_eq!(serde_json::to_string(&Day::Sunday).unwrap(), "\"Sunday\"");
        assert_eq!(serde_json::to_string(&Day::Wednesday).unwrap(), "\"Wednesday\"");
    }

    #[test]
    fn test_serde_deserialize() {
        assert_eq!(serde_json::from_str::<Day>("\"sat\"").unwrap(), Day::Saturday);
        assert_eq!(serde_json::from_str::<Day>("\"THURSDAY\"").unwrap(), Day::Thursday);
        serde_json::from_str::<Day>("\"thurs\"").unwrap_err();
        serde_json::from_str::<Day>("5").unwrap_err();
    }
}
