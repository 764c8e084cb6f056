// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal front-end of the class routine viewer.

mod alert_formatter;
mod arg;
mod block_formatter;
mod cli;
mod cmd_alerts;
mod cmd_calendar;
mod cmd_day;
mod cmd_generate_completion;
mod cmd_week;
mod config;
mod table;

pub use crate::cli::{Cli, Commands, run};
