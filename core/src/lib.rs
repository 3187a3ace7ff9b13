// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Time-grid helpers for calendar views.
//!
//! Pure, synchronous queries over caller-owned [`CalendarEvent`]s: which events
//! cross each other, which fit inside a single day, which belong in the
//! all-day row, plus grid sizing, view selection and resource matching.

mod config;
mod datetime;
mod day;
mod error;
mod event;
mod grid;
mod interval;
mod resource;
mod view;

pub use crate::config::{GridConfig, SchedulerConfig};
pub use crate::datetime::{day_span, end_of_day, is_within, start_of_day};
pub use crate::day::DayReference;
pub use crate::error::{Error, Result};
pub use crate::event::{CalendarEvent, EventId};
pub use crate::grid::{MIN_ROW_HEIGHT, cell_pixel_height, row_pixel_height};
pub use crate::interval::{
    CROSSING_TOLERANCE_MINUTES, filter_multi_day_events, filter_same_day_events,
    find_crossing_events,
};
pub use crate::resource::{
    FieldSpec, Resource, ResourceAssociation, ResourceFields, ResourceMatcher,
};
pub use crate::view::{View, ViewConfig};
