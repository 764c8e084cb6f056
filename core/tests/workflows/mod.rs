// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the routine-core crate.
//!
//! These tests drive the public API the way a routine screen does: load a file, search,
//! merge, page through the calendar and plan reminders.

mod calendar_paging;
mod config_driven;
mod day_view;
mod weekly_export;
