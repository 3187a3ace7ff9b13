// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::tz::{self, TimeZone};
use timegrid_core::{CalendarEvent, filter_same_day_events};

use crate::common::{all_day, assert_ids, assert_sorted_by_end, at, at_in, day, timed};

fn sample() -> Vec<CalendarEvent> {
    vec![
        timed("lunch", at(2, 12, 0), at(2, 13, 0)),
        all_day("offsite", 2, 2),
        timed("standup", at(2, 9, 0), at(2, 9, 15)),
        timed("overnight", at(2, 22, 0), at(3, 6, 0)),
        timed("review", at(2, 11, 0), at(2, 13, 0)),
        timed("tomorrow", at(3, 9, 0), at(3, 10, 0)),
        timed("late", at(2, 23, 0), at(2, 23, 59)),
    ]
}

#[test]
fn keeps_timed_events_of_the_day_sorted_by_end() {
    let events = sample();
    let same_day = filter_same_day_events(&events, day(2));

    assert_ids(&same_day, &["standup", "lunch", "review", "late"]);
    assert_sorted_by_end(&same_day);
}

#[test]
fn never_returns_all_day_or_day_crossing_events() {
    let events = sample();
    for d in 1..=4 {
        for event in filter_same_day_events(&events, day(d)) {
            assert!(!event.all_day, "{} is all-day", event.id);
            assert_eq!(event.start.date(), event.end.date(), "{} crosses a day", event.id);
        }
    }
}

#[test]
fn ties_keep_input_order() {
    let events = [
        timed("b", at(2, 9, 0), at(2, 10, 0)),
        timed("a", at(2, 8, 0), at(2, 10, 0)),
        timed("c", at(2, 9, 30), at(2, 10, 0)),
    ];

    assert_ids(&filter_same_day_events(&events, day(2)), &["b", "a", "c"]);
}

#[test]
fn empty_day_yields_nothing() {
    let events = sample();
    assert!(filter_same_day_events(&events, day(20)).is_empty());
    assert!(filter_same_day_events(&[], day(2)).is_empty());
}

#[test]
fn day_is_taken_in_the_event_time_zone() {
    let tz = TimeZone::fixed(tz::offset(-5));
    // 2025-06-02 21:00-22:30 at -05:00 is on the 3rd in UTC
    let events = [timed("evening", at_in(tz.clone(), 2, 21, 0), at_in(tz, 2, 22, 30))];

    assert_ids(&filter_same_day_events(&events, day(2)), &["evening"]);
    assert!(filter_same_day_events(&events, day(3)).is_empty());
}

#[test]
fn never_returns_event_ending_before_its_start_day() {
    let events = [
        timed("inverted", at(3, 9, 0), at(2, 23, 0)),
        timed("ok", at(3, 9, 0), at(3, 9, 30)),
    ];

    assert_ids(&filter_same_day_events(&events, day(3)), &["ok"]);
}
