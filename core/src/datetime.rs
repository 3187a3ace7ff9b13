// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod util;

pub use util::{day_span, end_of_day, is_within, start_of_day};
pub(crate) use util::spans_day;
