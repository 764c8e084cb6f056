// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Saturday-first calendar windows: weeks, months and the pager that chains them.

mod month;
mod strip;
mod week;

pub use month::{CalendarMonth, build_month};
pub use strip::{Edge, Window, WindowStrip};
pub use week::{
    CalendarWeek, WEEK_START, WeekOrder, current_week, is_same_month, nearest_saturday,
    next_week, previous_week,
};
