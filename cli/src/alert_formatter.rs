// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use routine_core::{ClassAlert, weekday_str};

use crate::arg::ArgOutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn};

#[derive(Debug)]
pub struct AlertFormatter {
    format: ArgOutputFormat,
}

impl AlertFormatter {
    pub fn new(format: ArgOutputFormat) -> Self {
        Self { format }
    }

    pub fn format<'a>(&'a self, alerts: &'a [ClassAlert]) -> Display<'a> {
        Display {
            alerts,
            format: self.format,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    alerts: &'a [ClassAlert],
    format: ArgOutputFormat,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.alerts).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                const COLUMNS: [AlertColumn; 4] = [
                    AlertColumn::Weekday,
                    AlertColumn::Trigger,
                    AlertColumn::Title,
                    AlertColumn::Body,
                ];
                write!(f, "{}", Table::new(&COLUMNS, self.alerts))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum AlertColumn {
    Weekday,
    Trigger,
    Title,
    Body,
}

impl TableColumn<ClassAlert> for AlertColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            AlertColumn::Weekday => "Weekday",
            AlertColumn::Trigger => "At",
            AlertColumn::Title => "Title",
            AlertColumn::Body => "Body",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a ClassAlert) -> Cow<'a, str> {
        match self {
            AlertColumn::Weekday => weekday_str(data.weekday).into(),
            AlertColumn::Trigger => format!("{:02}:{:02}", data.hour, data.minute).into(),
            AlertColumn::Title => data.title.as_str().into(),
            AlertColumn::Body => data.body.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            AlertColumn::Trigger => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
