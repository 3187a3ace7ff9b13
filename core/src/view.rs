// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use crate::{Error, Result};

/// A calendar view of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum View {
    /// One month, as a grid of days.
    Month,

    /// One week, as a time grid with a column per day.
    Week,

    /// One day, as a single time grid column.
    Day,
}

const VIEW_MONTH: &str = "month";
const VIEW_WEEK: &str = "week";
const VIEW_DAY: &str = "day";

impl AsRef<str> for View {
    fn as_ref(&self) -> &str {
        match self {
            View::Month => VIEW_MONTH,
            View::Week => VIEW_WEEK,
            View::Day => VIEW_DAY,
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for View {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            VIEW_MONTH => Ok(View::Month),
            VIEW_WEEK => Ok(View::Week),
            VIEW_DAY => Ok(View::Day),
            _ => Err(()),
        }
    }
}

/// Which views the scheduler offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Whether the month view is enabled.
    pub month: bool,

    /// Whether the week view is enabled.
    pub week: bool,

    /// Whether the day view is enabled.
    pub day: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            month: true,
            week: true,
            day: true,
        }
    }
}

impl ViewConfig {
    /// The view to show first: month, else week, else day.
    ///
    /// Fails when no view is enabled, which is a configuration error.
    pub fn active_view(&self) -> Result<View> {
        self.available_views()
            .into_iter()
            .next()
            .ok_or(Error::NoViewEnabled)
    }

    /// The enabled views, ordered month, week, day.
    pub fn available_views(&self) -> Vec<View> {
        [
            (self.month, View::Month),
            (self.week, View::Week),
            (self.day, View::Day),
        ]
        .into_iter()
        .filter_map(|(enabled, view)| enabled.then_some(view))
        .collect()
    }
}
