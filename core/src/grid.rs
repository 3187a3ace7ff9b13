// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Smallest height of an hour row.
pub const MIN_ROW_HEIGHT: f64 = 60.0;

/// Height of one step within a cell: the cell height rounded up, divided by `steps`.
///
/// `steps` must be positive, zero yields infinity.
pub fn cell_pixel_height(total_height: f64, steps: f64) -> f64 {
    total_height.ceil() / steps
}

/// Height of one hour row, never below [`MIN_ROW_HEIGHT`].
pub fn row_pixel_height(table_height: f64, hour_count: f64) -> f64 {
    (table_height / hour_count).max(MIN_ROW_HEIGHT)
}
