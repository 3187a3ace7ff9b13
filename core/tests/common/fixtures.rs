// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! All fixtures live in June 2025 and use UTC unless a zone is given.

use jiff::civil::{Date, date};
use jiff::tz::TimeZone;
use jiff::{ToSpan, Zoned};
use timegrid_core::CalendarEvent;

/// A calendar day of June 2025.
#[must_use]
pub fn day(d: i8) -> Date {
    date(2025, 6, d)
}

/// An instant on a day of June 2025, in UTC.
///
/// # Example
///
/// ```ignore
/// let start = at(2, 9, 30); // 2025-06-02T09:30Z
/// ```
#[must_use]
pub fn at(d: i8, h: i8, m: i8) -> Zoned {
    at_in(TimeZone::UTC, d, h, m)
}

/// An instant on a day of June 2025, in the given time zone.
#[must_use]
pub fn at_in(tz: TimeZone, d: i8, h: i8, m: i8) -> Zoned {
    day(d)
        .at(h, m, 0, 0)
        .to_zoned(tz)
        .expect("fixture datetime must be valid")
}

/// A timed event.
#[must_use]
pub fn timed(id: &str, start: Zoned, end: Zoned) -> CalendarEvent {
    CalendarEvent::new(id, start, end).with_title(format!("event {id}"))
}

/// An all-day event from day `first` to day `last`, both inclusive.
#[must_use]
pub fn all_day(id: &str, first: i8, last: i8) -> CalendarEvent {
    timed(id, at(first, 0, 0), at(last, 0, 0)).all_day()
}

/// The seven days of the week starting on day `monday`.
#[must_use]
pub fn week_of(monday: i8) -> Vec<Date> {
    (0..7_i64).map(|i| day(monday) + i.days()).collect()
}
