// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{Unit, Zoned, civil::Date};

/// The start of the day (00:00:00) for the given `Zoned` in the same timezone.
///
/// Falls back to the instant itself when the boundary is out of range.
pub fn start_of_day(dt: &Zoned) -> Zoned {
    dt.start_of_day().unwrap_or_else(|err| {
        tracing::warn!(%dt, %err, "start of day out of range, using instant as is");
        dt.clone()
    })
}

/// The end of the day (23:59:59.999999999) for the given `Zoned` in the same timezone.
///
/// Falls back to the instant itself when the boundary is out of range.
pub fn end_of_day(dt: &Zoned) -> Zoned {
    dt.end_of_day().unwrap_or_else(|err| {
        tracing::warn!(%dt, %err, "end of day out of range, using instant as is");
        dt.clone()
    })
}

/// Whether `t` lies in the closed interval `[start, end]`.
///
/// An inverted interval contains nothing.
pub fn is_within(t: &Zoned, start: &Zoned, end: &Zoned) -> bool {
    start <= t && t <= end
}

/// Number of calendar-day boundaries crossed between `start` and `end`.
///
/// Measured as whole days from the start of `start`'s day to the end of
/// `end`'s day, truncated toward zero, so two instants on the same calendar
/// day give 0. Days are counted in `start`'s time zone.
pub fn day_span(start: &Zoned, end: &Zoned) -> i64 {
    let end = end.with_time_zone(start.time_zone().clone());
    let from = start_of_day(start);
    let to = end_of_day(&end);
    match from.until((Unit::Day, &to)) {
        Ok(span) => i64::from(span.get_days()),
        Err(err) => {
            tracing::warn!(%start, %end, %err, "failed to measure day span");
            0
        }
    }
}

/// Whether `day` falls between the calendar days of `start` and `end`, inclusive.
///
/// Equivalent to the day's midnight lying within
/// `[start_of_day(start), end_of_day(end)]`, with `end` viewed in `start`'s
/// time zone.
pub(crate) fn spans_day(start: &Zoned, end: &Zoned, day: Date) -> bool {
    let end = end.with_time_zone(start.time_zone().clone());
    start.date() <= day && day <= end.date()
}
