// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! # Chrono-DateUtils
//!
//! Day-level date utilities for [Chrono](https://docs.rs/chrono): comparisons, classification,
//! day arithmetic, month metadata and date ranges on the Gregorian calendar, all of them safe
//! across daylight saving time transitions.
//!
//! Everything works on Chrono's [`DateTime<Tz>`](chrono::DateTime) and reads calendar fields in
//! the value's own time zone. Functionality comes as extension traits, in the manner of
//! Chrono's `Datelike` and `Timelike`:
//!
//! - [`Canonical`] moves a timestamp to the *canonical* time of day, 12:01:00, so that two
//!   timestamps on the same local day compare equal no matter what happened to the wall clock
//!   in between;
//! - [`DayShift`] adds and subtracts whole calendar days while keeping the time of day, which is
//!   not the same as adding multiples of 24 hours;
//! - [`CalendarQuery`] reads year, month, day and weekday numbers and compares them;
//! - [`Described`] renders the standard [`StandardDateFormat`] presets.
//!
//! [`Month`] carries the month metadata (days in a month, its name, the number of calendar rows
//! it spans) and [`DateRange`] a closed range with inclusive and exclusive day counts.
//!
//! ### Example
//!
//! ```
//! use chrono::TimeZone;
//! use chrono_dateutils::{Canonical, DayShift, CalendarQuery, Day};
//! # use chrono::FixedOffset as Zone;
//! # let zone = Zone::east_opt(3600).unwrap();
//!
//! let friday = zone.with_ymd_and_hms(2024, 3, 29, 18, 30, 0).unwrap();
//! let saturday = friday.next_day().unwrap();
//! assert_eq!(saturday.day_of_week(), Day::Saturday);
//! assert!(saturday.is_on_weekend());
//! assert!(saturday.is_same_day(&saturday.start_of_day().unwrap()));
//! assert!(!saturday.is_same_day(&friday));
//! ```
//!
//! ### Failure
//!
//! Calendar computations that cannot produce a value (a date that does not exist, a result out
//! of Chrono's range) return `None`. Predicates such as [`Canonical::is_same_day`] report such a
//! failure as `false`; each has a `try_` twin returning `Option<bool>` for callers that need to
//! tell the two apart. [`DateRange`] construction returns a [`RangeError`].
//!
//! ### Time zones
//!
//! Operations without an input timestamp ([`now`], [`today`], [`Month::name`] and the like) use
//! the system time zone through the shared [`Calendar::local`]. Build a [`Calendar`] for any
//! other [`TimeZone`](chrono::TimeZone) to get the same operations there.
//!
//! ### Crate features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Day`], [`Month`], [`Era`], [`CalendarFields`] and
//!   [`DateRange`]. Deserializing a range checks its order.
//! - `unstable-locales`: `formatted_date_localized`, forwarding to Chrono's localized
//!   formatting.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod calendar;
pub use calendar::{Calendar, CalendarFields, Era, PartialFields};

mod canonical;
pub use canonical::{
    canonical_today, create_canonical_date, Canonical, CANONICAL_HOUR, CANONICAL_MINUTE,
    CANONICAL_SECOND, CANONICAL_TIME,
};

mod day;
pub use day::{Day, OutOfRangeDay, ParseDayError};

mod error;
pub use error::{RangeError, RangeErrorKind};

mod format;
#[cfg(feature = "unstable-locales")]
pub use format::formatted_date_localized;
pub use format::{formatted_date, formatted_date_with, Described, StandardDateFormat};

mod month;
pub use month::{Month, OutOfRangeMonth, ParseMonthError};

mod query;
pub use query::{is_leap_year, CalendarQuery};

mod range;
pub use range::{distant_past, DateRange};

mod shift;
pub use shift::{difference_in_days, now, today, tomorrow, yesterday, DayShift};
