// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fmt::Display;

use jiff::Zoned;
use serde::{Deserialize, Serialize};

use crate::ResourceAssociation;
use crate::datetime::day_span;

/// Unique identifier of a calendar event.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Borrows the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// An event placed on the time grid.
///
/// Events are owned by the caller; the queries in this crate only borrow them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The unique identifier for the event.
    pub id: EventId,

    /// The title of the event.
    #[serde(default)]
    pub title: String,

    /// The start instant of the event.
    pub start: Zoned,

    /// The end instant of the event, expected to be no earlier than `start`.
    pub end: Zoned,

    /// Whether the event occupies whole days with no meaningful time of day.
    #[serde(default)]
    pub all_day: bool,

    /// The display color of the event, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Resource associations keyed by resource field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resources: BTreeMap<String, ResourceAssociation>,
}

impl CalendarEvent {
    /// Creates a timed event with no title, color or resources.
    pub fn new(id: impl Into<EventId>, start: Zoned, end: Zoned) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            start,
            end,
            all_day: false,
            color: None,
            resources: BTreeMap::new(),
        }
    }

    /// Marks the event as all-day.
    pub fn all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Associates the event with a resource through the given field.
    pub fn with_resource(
        mut self,
        field: impl Into<String>,
        association: impl Into<ResourceAssociation>,
    ) -> Self {
        self.resources.insert(field.into(), association.into());
        self
    }

    /// The resource association stored under `field`, if any.
    pub fn resource(&self, field: &str) -> Option<&ResourceAssociation> {
        self.resources.get(field)
    }

    /// Calendar-day boundaries crossed between start and end.
    pub fn day_span(&self) -> i64 {
        day_span(&self.start, &self.end)
    }

    /// Whether the event belongs in the all-day / multi-day row rather than the time grid.
    pub fn is_multi_day(&self) -> bool {
        self.all_day || self.day_span() > 0
    }
}
