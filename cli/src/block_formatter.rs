// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use routine_core::{MergedBlock, NOT_AVAILABLE, to_minutes};

use crate::arg::ArgOutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn};

#[derive(Debug)]
pub struct BlockFormatter {
    columns: Vec<BlockColumn>,
    format: ArgOutputFormat,
    now: Option<i64>,
}

impl BlockFormatter {
    pub fn new(columns: Vec<BlockColumn>) -> Self {
        Self {
            columns,
            format: ArgOutputFormat::Table,
            now: None,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Minutes since midnight, when the blocks are today's; finished and running classes are
    /// colored.
    pub fn with_now(mut self, now: Option<i64>) -> Self {
        self.now = now;
        self
    }

    pub fn format<'a>(&'a self, blocks: &'a [MergedBlock]) -> Display<'a> {
        Display {
            blocks,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    blocks: &'a [MergedBlock],
    formatter: &'a BlockFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.blocks).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                let columns: Vec<_> = self
                    .formatter
                    .columns
                    .iter()
                    .map(|column| Stylized {
                        column,
                        now: self.formatter.now,
                    })
                    .collect();
                write!(f, "{}", Table::new(&columns, self.blocks))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockColumn {
    Day,
    Time,
    Duration,
    Course,
    Section,
    Teacher,
    Room,
}

impl BlockColumn {
    fn name(self) -> &'static str {
        match self {
            BlockColumn::Day => "Day",
            BlockColumn::Time => "Time",
            BlockColumn::Duration => "Duration",
            BlockColumn::Course => "Course",
            BlockColumn::Section => "Section",
            BlockColumn::Teacher => "Teacher",
            BlockColumn::Room => "Room",
        }
    }

    fn format(self, block: &MergedBlock) -> Cow<'_, str> {
        match self {
            BlockColumn::Day => title_case(routine_core::weekday_str(block.day)).into(),
            BlockColumn::Time => block.time_range().into(),
            BlockColumn::Duration => block.duration().into(),
            BlockColumn::Course => format!("{} {}", block.course_code, block.course_title).into(),
            BlockColumn::Section => block.section.as_str().into(),
            BlockColumn::Teacher => block.teacher_initial.as_str().into(),
            BlockColumn::Room => block.display_room().into(),
        }
    }
}

/// A column together with the time used to color rows.
struct Stylized<'a> {
    column: &'a BlockColumn,
    now: Option<i64>,
}

impl TableColumn<MergedBlock> for Stylized<'_> {
    fn name(&self) -> Cow<'_, str> {
        self.column.name().into()
    }

    fn format<'a>(&self, data: &'a MergedBlock) -> Cow<'a, str> {
        self.column.format(data)
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self.column {
            BlockColumn::Duration => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &MergedBlock) -> Option<Color> {
        if *self.column == BlockColumn::Room && data.room == NOT_AVAILABLE {
            return Some(Color::BrightBlack);
        }

        let now = self.now?;
        let (start, end) = (to_minutes(&data.start_time)?, to_minutes(&data.end_time)?);
        if end <= now {
            Some(Color::BrightBlack)
        } else if start <= now {
            Some(Color::Green)
        } else {
            None
        }
    }
}

fn title_case(upper: &str) -> String {
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
