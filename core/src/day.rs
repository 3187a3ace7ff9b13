// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use serde::Deserialize;

/// The visible day or days a query runs against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DayReference {
    /// A single calendar day, as shown by the day view.
    Single(Date),

    /// An ordered set of calendar days, as shown by the week view.
    Multiple(Vec<Date>),
}

impl DayReference {
    /// Iterates over the referenced days in order.
    pub fn days(&self) -> impl Iterator<Item = Date> + '_ {
        let days: &[Date] = match self {
            DayReference::Single(day) => std::slice::from_ref(day),
            DayReference::Multiple(days) => days,
        };
        days.iter().copied()
    }

    /// Whether any referenced day satisfies `f`.
    pub fn any(&self, f: impl FnMut(Date) -> bool) -> bool {
        self.days().any(f)
    }
}

impl From<Date> for DayReference {
    fn from(day: Date) -> Self {
        DayReference::Single(day)
    }
}

impl From<Vec<Date>> for DayReference {
    fn from(days: Vec<Date>) -> Self {
        DayReference::Multiple(days)
    }
}

impl From<&[Date]> for DayReference {
    fn from(days: &[Date]) -> Self {
        DayReference::Multiple(days.to_vec())
    }
}

impl<const N: usize> From<[Date; N]> for DayReference {
    fn from(days: [Date; N]) -> Self {
        DayReference::Multiple(days.to_vec())
    }
}
