// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Named format presets and a pass-through to Chrono's `strftime` formatter.
//!
//! Patterns use the syntax of [`chrono::format::strftime`]. A pattern that the formatter rejects
//! renders as an empty string rather than panicking.

use core::fmt::{self, Write};

use chrono::{DateTime, TimeZone};

/// Standard format presets.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum StandardDateFormat {
    /// The full year, `2024`.
    Year,
    /// The full month name, `February`.
    Month,
    /// The zero-padded day of the month, `09`.
    Day,
    /// Weekday, abbreviated month, day and year: `Friday, Feb 09 2024`.
    ShortDate,
    /// Hour and minute on a 12-hour clock: `3:07 PM`.
    ShortTime,
    /// Hour, minute and second on a 12-hour clock: `3:07:45 PM`.
    LongTime,
}

impl StandardDateFormat {
    /// The `strftime` pattern of this preset.
    pub const fn pattern(self) -> &'static str {
        match self {
            StandardDateFormat::Year => "%Y",
            StandardDateFormat::Month => "%B",
            StandardDateFormat::Day => "%d",
            StandardDateFormat::ShortDate => "%A, %b %d %Y",
            StandardDateFormat::ShortTime => "%-I:%M %p",
            StandardDateFormat::LongTime => "%-I:%M:%S %p",
        }
    }
}

impl fmt::Display for StandardDateFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Renders `dt` in its own time zone with a `strftime` `pattern`.
///
/// Returns an empty string if `pattern` is not a valid format string.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_dateutils::formatted_date;
///
/// let dt = Utc.with_ymd_and_hms(2024, 2, 9, 15, 7, 45).unwrap();
/// assert_eq!(formatted_date(&dt, "%Y/%m/%d"), "2024/02/09");
/// assert_eq!(formatted_date(&dt, "%Q"), "");
/// ```
pub fn formatted_date<Tz>(dt: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", dt.format(pattern)).is_err() {
        log::trace!("invalid format pattern {:?}", pattern);
        out.clear();
    }
    out
}

/// Renders `dt` with a preset.
pub fn formatted_date_with<Tz>(dt: &DateTime<Tz>, format: StandardDateFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    formatted_date(dt, format.pattern())
}

/// Renders `dt` with a `strftime` `pattern` in the given locale.
///
/// Returns an empty string if `pattern` is not a valid format string.
#[cfg(feature = "unstable-locales")]
#[cfg_attr(docsrs, doc(cfg(feature = "unstable-locales")))]
pub fn formatted_date_localized<Tz>(
    dt: &DateTime<Tz>,
    pattern: &str,
    locale: chrono::Locale,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", dt.format_localized(pattern, locale)).is_err() {
        log::trace!("invalid format pattern {:?} for {:?}", pattern, locale);
        out.clear();
    }
    out
}

fn composite(first: StandardDateFormat, second: StandardDateFormat) -> String {
    format!("{}, {}", first.pattern(), second.pattern())
}

/// Extension trait rendering a timestamp with the standard presets.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_dateutils::Described;
///
/// let dt = Utc.with_ymd_and_hms(2024, 2, 9, 15, 7, 45).unwrap();
/// assert_eq!(dt.short_date_description(), "Friday, Feb 09 2024");
/// assert_eq!(dt.short_date_time_description(), "Friday, Feb 09 2024, 3:07 PM");
/// ```
pub trait Described {
    /// [`StandardDateFormat::ShortDate`].
    fn short_date_description(&self) -> String;

    /// [`StandardDateFormat::ShortTime`].
    fn short_time_description(&self) -> String;

    /// [`StandardDateFormat::ShortDate`] and [`StandardDateFormat::LongTime`], comma separated.
    fn short_date_long_time_description(&self) -> String;

    /// [`StandardDateFormat::ShortDate`] and [`StandardDateFormat::ShortTime`], comma separated.
    fn short_date_time_description(&self) -> String;

    /// [`StandardDateFormat::Year`].
    fn year_description(&self) -> String;

    /// [`StandardDateFormat::Month`].
    fn month_description(&self) -> String;

    /// [`StandardDateFormat::Day`].
    fn day_description(&self) -> String;
}

impl<Tz> Described for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn short_date_description(&self) -> String {
        formatted_date_with(self, StandardDateFormat::ShortDate)
    }

    fn short_time_description(&self) -> String {
        formatted_date_with(self, StandardDateFormat::ShortTime)
    }

    fn short_date_long_time_description(&self) -> String {
        let pattern = composite(StandardDateFormat::ShortDate, StandardDateFormat::LongTime);
        formatted_date(self, &pattern)
    }

    fn short_date_time_description(&self) -> String {
        let pattern = composite(StandardDateFormat::ShortDate, StandardDateFormat::ShortTime);
        formatted_date(self, &pattern)
    }

    fn year_description(&self) -> String {
        formatted_date_with(self, StandardDateFormat::Year)
    }

    fn month_description(&self) -> String {
        formatted_date_with(self, StandardDateFormat::Month)
    }

    fn day_description(&self) -> String {
        formatted_date_with(self, StandardDateFormat::Day)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone, Utc};

    use super::{formatted_date, formatted_date_with, Described, StandardDateFormat};

    #[test]
    fn test_presets() {
        let dt = Utc.with_ymd_and_hms(2024, 2, 9, 15, 7, 45).unwrap();
        assert_eq!(formatted_date_with(&dt, StandardDateFormat::Year), "2024");
        assert_eq!(formatted_date_with(&dt, StandardDateFormat::Month), "February");
        assert_eq!(formatted_date_with(&dt, StandardDateFormat::Day), "09");
        assert_eq!(formatted_date_with(&dt, StandardDateFormat::ShortDate), "Friday, Feb 09 2024");
        assert_eq!(formatted_date_with(&dt, StandardDateFormat::ShortTime), "3:07 PM");
        assert_eq!(formatted_date_with(&dt, StandardDateFormat::LongTime), "3:07:45 PM");
    }

    #[test]
    fn test_descriptions() {
        let dt = Utc.with_ymd_and_hms(2023, 11, 30, 0, 5, 1).unwrap();
        assert_eq!(dt.year_description(), "2023");
        assert_eq!(dt.month_description(), "November");
        assert_eq!(dt.day_description(), "30");
        assert_eq!(dt.short_date_description(), "Thursday, Nov 30 2023");
        assert_eq!(dt.short_time_description(), "12:05 AM");
        assert_eq!(dt.short_date_long_time_description(), "Thursday, Nov 30 2023, 12:05:01 AM");
        assert_eq!(dt.short_date_time_description(), "Thursday, Nov 30 2023, 12:05 AM");
    }

    #[test]
    fn test_uses_own_zone() {
        let zone = FixedOffset::west_opt(8 * 3600).unwrap();
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap().with_timezone(&zone);
        assert_eq!(dt.short_date_time_description(), "Sunday, Dec 31 2023, 7:00 PM");
    }

    #[test]
    fn test_pass_through() {
        let dt = Utc.with_ymd_and_hms(2024, 2, 9, 15, 7, 45).unwrap();
        assert_eq!(formatted_date(&dt, "%H:%M:%S"), "15:07:45");
        assert_eq!(formatted_date(&dt, "literal"), "literal");
        assert_eq!(formatted_date(&dt, ""), "");
        assert_eq!(formatted_date(&dt, "%"), "");
    }

    #[test]
    fn test_pattern_display() {
        assert_eq!(StandardDateFormat::ShortDate.to_string(), "%A, %b %d %Y");
    }
}
