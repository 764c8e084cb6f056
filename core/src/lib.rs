// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Routine core: merges class sessions into displayable blocks and builds Saturday-first
//! calendar windows.

mod alert;
mod calendar;
mod config;
mod error;
mod io;
mod merge;
mod routine;
mod search;
mod session;
mod time;

pub use crate::alert::{ClassAlert, DEFAULT_LEAD_MINUTES, plan_alerts};
pub use crate::calendar::{
    CalendarMonth, CalendarWeek, Edge, WEEK_START, WeekOrder, Window, WindowStrip, build_month,
    current_week, is_same_month, nearest_saturday, next_week, previous_week,
};
pub use crate::config::{APP_NAME, Config, config_dir};
pub use crate::error::RoutineError;
pub use crate::io::{load_sessions, parse_sessions};
pub use crate::merge::{
    GroupingPolicy, MergedBlock, WEEKLY_DAY_ORDER, merge_sessions, merge_weekly,
};
pub use crate::routine::Routine;
pub use crate::search::{RoutineQuery, SearchContext};
pub use crate::session::{
    NOT_AVAILABLE, RawSession, ScheduleSession, UNKNOWN, UNKNOWN_TEACHER, parse_weekday,
    weekday_str,
};
pub use crate::time::{
    SLOT_ORDER, clean_room, compare_slots, duration, duration_minutes, format_12_hour,
    format_minutes, slot_rank, to_minutes, total_minutes,
};
