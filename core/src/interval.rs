// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Interval queries over calendar events.
//!
//! These back the time grid: which events share a column slot with another,
//! which timed events fit inside one day, and which events belong in the
//! all-day row of the visible days.

use jiff::civil::Date;
use jiff::{ToSpan, Zoned};

use crate::datetime::{is_within, spans_day};
use crate::{CalendarEvent, DayReference};

/// Inward margin, in minutes, applied to event boundaries when testing for crossings.
///
/// Events that only touch at an instant do not cross.
pub const CROSSING_TOLERANCE_MINUTES: i64 = 1;

/// Events that cross `target`, in input order.
///
/// Two events cross when one boundary of either, moved inward by
/// [`CROSSING_TOLERANCE_MINUTES`], lies within the other's closed interval.
/// Events sharing `target`'s id are excluded, so an event never crosses itself.
pub fn find_crossing_events<'a>(
    events: &'a [CalendarEvent],
    target: &CalendarEvent,
) -> Vec<&'a CalendarEvent> {
    let crossing: Vec<_> = events
        .iter()
        .filter(|e| e.id != target.id && crosses(target, e))
        .collect();

    tracing::debug!(event = %target.id, count = crossing.len(), "found crossing events");
    crossing
}

/// Timed events starting on `day` that do not cross a day boundary, sorted by end.
///
/// The sort is stable, events ending at the same instant keep their input order.
/// Inverted events are skipped: [`day_span`](crate::day_span) truncates toward
/// zero, so one ending on the day before its start would otherwise pass.
pub fn filter_same_day_events(events: &[CalendarEvent], day: Date) -> Vec<&CalendarEvent> {
    let mut same_day: Vec<_> = events
        .iter()
        .filter(|e| {
            !e.all_day && e.start <= e.end && e.start.date() == day && e.day_span() == 0
        })
        .collect();
    same_day.sort_by(|a, b| a.end.timestamp().cmp(&b.end.timestamp()));

    tracing::debug!(%day, count = same_day.len(), "filtered same-day events");
    same_day
}

/// All-day or multi-day events covering at least one of `days`, in input order.
///
/// An event covers a day when the day falls between the calendar days of its
/// start and end, both inclusive.
pub fn filter_multi_day_events(
    events: &[CalendarEvent],
    days: impl Into<DayReference>,
) -> Vec<&CalendarEvent> {
    let days = days.into();
    let multi_day: Vec<_> = events
        .iter()
        .filter(|e| e.is_multi_day() && days.any(|day| spans_day(&e.start, &e.end, day)))
        .collect();

    tracing::debug!(?days, count = multi_day.len(), "filtered multi-day events");
    multi_day
}

fn crosses(a: &CalendarEvent, b: &CalendarEvent) -> bool {
    boundary_within(a, b) || boundary_within(b, a)
}

/// Whether a boundary of `inner`, moved inward by the tolerance, lies in `outer`.
///
/// Inverted events have no inward boundaries to test. A zero-duration event
/// still tests its instant moved either way.
fn boundary_within(inner: &CalendarEvent, outer: &CalendarEvent) -> bool {
    if inner.start > inner.end {
        return false;
    }

    let start = shift_minutes(&inner.start, CROSSING_TOLERANCE_MINUTES);
    let end = shift_minutes(&inner.end, -CROSSING_TOLERANCE_MINUTES);

    let within = |t: &Option<Zoned>| {
        t.as_ref()
            .is_some_and(|t| is_within(t, &outer.start, &outer.end))
    };
    within(&start) || within(&end)
}

/// `None` when the shifted instant is out of range.
fn shift_minutes(t: &Zoned, minutes: i64) -> Option<Zoned> {
    t.checked_add(minutes.minutes()).ok()
}
