// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Resource association for events.
//!
//! A resource (a room, a person, a machine) is matched to events through a
//! configurable id field. Whether that field holds one key or a set of keys is
//! resolved once from the field specs into a [`ResourceMatcher`].

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::CalendarEvent;

/// The resource key(s) an event is associated with through one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceAssociation {
    /// A single-select value.
    Single(String),

    /// A multi-select value.
    Multiple(BTreeSet<String>),
}

impl ResourceAssociation {
    /// Whether `key` is part of this association.
    pub fn contains(&self, key: &str) -> bool {
        match self {
            ResourceAssociation::Single(k) => k == key,
            ResourceAssociation::Multiple(keys) => keys.contains(key),
        }
    }
}

impl From<&str> for ResourceAssociation {
    fn from(key: &str) -> Self {
        ResourceAssociation::Single(key.to_owned())
    }
}

impl From<String> for ResourceAssociation {
    fn from(key: String) -> Self {
        ResourceAssociation::Single(key)
    }
}

impl<S: Into<String>> FromIterator<S> for ResourceAssociation {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ResourceAssociation::Multiple(iter.into_iter().map(Into::into).collect())
    }
}

/// A resource row of the scheduler, as a set of named attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Resource(BTreeMap<String, String>);

impl Resource {
    /// Creates a resource without attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// The attribute stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Names of the resource attributes used to match events and pick colors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceFields {
    /// The attribute identifying a resource, shared with the event's resource field.
    pub id_field: String,

    /// The resource attribute used as fallback event color.
    #[serde(default)]
    pub color_field: Option<String>,
}

/// An editor field definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldSpec {
    /// The field name.
    pub name: String,

    /// Whether the field accepts several values.
    #[serde(default)]
    pub multiple: bool,
}

/// Matches events to resources, with the id field and its arity resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMatcher {
    id_field: String,
    color_field: Option<String>,
    multiple: bool,
}

impl ResourceMatcher {
    /// Resolves the matcher from the resource fields and the editor field specs.
    ///
    /// The id field is multi-select when a spec with the same name says so.
    pub fn resolve(fields: &ResourceFields, specs: &[FieldSpec]) -> Self {
        let multiple = specs
            .iter()
            .find(|spec| spec.name == fields.id_field)
            .is_some_and(|spec| spec.multiple);

        Self {
            id_field: fields.id_field.clone(),
            color_field: fields.color_field.clone(),
            multiple,
        }
    }

    /// The field events and resources are matched on.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// Whether the id field is multi-select.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Whether `event` belongs to `resource`.
    pub fn matches(&self, event: &CalendarEvent, resource: &Resource) -> bool {
        let Some(key) = resource.get(&self.id_field) else {
            return false;
        };

        match event.resource(&self.id_field) {
            Some(association) if self.multiple => association.contains(key),
            Some(ResourceAssociation::Single(k)) => k == key,
            Some(ResourceAssociation::Multiple(_)) | None => false,
        }
    }

    /// Copies of the events belonging to `resource`, in input order.
    ///
    /// Events without their own color take the resource's color attribute.
    pub fn events_for(&self, events: &[CalendarEvent], resource: &Resource) -> Vec<CalendarEvent> {
        let color = self
            .color_field
            .as_deref()
            .and_then(|field| resource.get(field));

        let matched: Vec<_> = events
            .iter()
            .filter(|event| self.matches(event, resource))
            .map(|event| {
                let mut event = event.clone();
                if event.color.is_none() {
                    event.color = color.map(str::to_owned);
                }
                event
            })
            .collect();

        tracing::debug!(
            field = %self.id_field,
            key = ?resource.get(&self.id_field),
            count = matched.len(),
            "matched events to resource"
        );
        matched
    }
}
