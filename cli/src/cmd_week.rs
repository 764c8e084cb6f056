// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use routine_core::{GroupingPolicy, Routine, SearchContext, format_minutes, total_minutes};

use crate::arg::{ArgOutputFormat, SearchArgs};
use crate::block_formatter::{BlockColumn, BlockFormatter};
use crate::cmd_day::counterpart_column;

#[derive(Debug, Clone)]
pub struct CmdWeek {
    pub search: Option<SearchContext>,
    pub saved: Option<GroupingPolicy>,
    pub output_format: ArgOutputFormat,
}

impl CmdWeek {
    pub const NAME: &str = "week";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("w")
            .about("Show the merged classes of the teaching week, Saturday to Thursday")
            .arg(SearchArgs::section())
            .arg(SearchArgs::teacher())
            .arg(SearchArgs::saved())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            search: SearchArgs::get(matches),
            saved: SearchArgs::get_saved(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, routine: &Routine) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing classes of the week...");

        let context = routine.search(self.search, self.saved)?;
        let blocks = routine.week(context.clone());
        let total = total_minutes(&blocks);

        match self.output_format {
            ArgOutputFormat::Json => {
                let json = serde_json::json!({
                    "query": context.text(),
                    "totalMinutes": total,
                    "blocks": blocks,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            ArgOutputFormat::Table => {
                println!("🗓️ {} {}", "Week".bold(), context.text().italic());
                if blocks.is_empty() {
                    println!("No classes");
                    return Ok(());
                }

                let formatter = BlockFormatter::new(vec![
                    BlockColumn::Day,
                    BlockColumn::Time,
                    BlockColumn::Duration,
                    BlockColumn::Course,
                    counterpart_column(&context),
                    BlockColumn::Room,
                ]);
                print!("{}", formatter.format(&blocks));
                println!(
                    "{} {} in {} classes",
                    "Total:".bold(),
                    format_minutes(total),
                    blocks.len()
                );
            }
        }
        Ok(())
    }
}
