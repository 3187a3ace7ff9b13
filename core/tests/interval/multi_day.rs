// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use jiff::civil::Date;
use timegrid_core::{CalendarEvent, DayReference, EventId, filter_multi_day_events};

use crate::common::{all_day, assert_ids, at, day, timed, week_of};

fn sample() -> Vec<CalendarEvent> {
    vec![
        all_day("holiday", 2, 2),
        timed("meeting", at(2, 9, 0), at(2, 10, 0)),
        timed("trip", at(3, 18, 0), at(5, 12, 0)),
        all_day("conference", 5, 7),
        timed("overnight", at(8, 22, 0), at(9, 2, 0)),
        all_day("next-week", 10, 10),
    ]
}

#[test]
fn single_day_selects_covering_events() {
    let events = sample();

    assert_ids(&filter_multi_day_events(&events, day(2)), &["holiday"]);
    assert_ids(&filter_multi_day_events(&events, day(4)), &["trip"]);
    assert_ids(&filter_multi_day_events(&events, day(5)), &["trip", "conference"]);
    assert_ids(&filter_multi_day_events(&events, day(9)), &["overnight"]);
    assert!(filter_multi_day_events(&events, day(1)).is_empty());
}

#[test]
fn never_returns_short_timed_events() {
    let events = sample();
    for d in 1..=10 {
        for event in filter_multi_day_events(&events, day(d)) {
            assert!(event.all_day || event.day_span() > 0, "{}", event.id);
        }
    }
}

#[test]
fn set_of_days_is_the_union_of_single_days() {
    let events = sample();
    let week = week_of(2);

    let union: BTreeSet<&EventId> = week
        .iter()
        .flat_map(|d| filter_multi_day_events(&events, *d))
        .map(|e| &e.id)
        .collect();
    let selected: BTreeSet<&EventId> = filter_multi_day_events(&events, week.as_slice())
        .into_iter()
        .map(|e| &e.id)
        .collect();

    assert_eq!(selected, union);
}

#[test]
fn set_of_days_keeps_input_order() {
    let events = sample();
    let selected = filter_multi_day_events(&events, DayReference::from(week_of(2)));

    assert_ids(&selected, &["holiday", "trip", "conference", "overnight"]);
}

#[test]
fn empty_set_of_days_selects_nothing() {
    let events = sample();
    assert!(filter_multi_day_events(&events, Vec::<Date>::new()).is_empty());
}
