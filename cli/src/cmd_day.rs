// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use jiff::civil::Date;
use routine_core::{GroupingPolicy, Routine, SearchContext};

use crate::arg::{ArgOutputFormat, DateArgs, SearchArgs};
use crate::block_formatter::{BlockColumn, BlockFormatter};

#[derive(Debug, Default, Clone)]
pub struct CmdDay {
    pub search: Option<SearchContext>,
    pub saved: Option<GroupingPolicy>,
    pub date: Option<Date>,
    pub output_format: ArgOutputFormat,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("Show the merged classes of one day")
            .arg(SearchArgs::section())
            .arg(SearchArgs::teacher())
            .arg(SearchArgs::saved())
            .arg(DateArgs::date())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            search: SearchArgs::get(matches),
            saved: SearchArgs::get_saved(matches),
            date: DateArgs::get_date(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, routine: &Routine) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing classes of the day...");

        let today = routine.today();
        let date = self.date.unwrap_or(today);
        let context = routine.search(self.search, self.saved)?;
        let blocks = routine.day(context.clone(), date.weekday());

        let now = (date == today).then(|| {
            let time = routine.now().time();
            i64::from(time.hour()) * 60 + i64::from(time.minute())
        });
        let formatter = BlockFormatter::new(vec![
            BlockColumn::Time,
            BlockColumn::Duration,
            BlockColumn::Course,
            counterpart_column(&context),
            BlockColumn::Room,
        ])
        .with_output_format(self.output_format)
        .with_now(now);

        if self.output_format == ArgOutputFormat::Table {
            let title = date.strftime("%A, %-d %B %Y").to_string();
            println!("🗓️ {} {}", title.bold(), context.text().italic());
            if blocks.is_empty() {
                println!("No classes");
                return Ok(());
            }
        }

        print!("{}", formatter.format(&blocks));
        Ok(())
    }
}

/// A section view shows who teaches; a teacher view shows whom.
pub(crate) fn counterpart_column(context: &SearchContext) -> BlockColumn {
    match context {
        SearchContext::Section(_) => BlockColumn::Teacher,
        SearchContext::Teacher(_) => BlockColumn::Section,
    }
}
