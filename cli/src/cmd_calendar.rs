// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::Zoned;
use jiff::civil::{Date, Weekday};
use routine_core::{CalendarMonth, Edge, WEEK_START, WindowStrip, build_month};

use crate::arg::{ArgOutputFormat, DateArgs};

/// Width of a rendered month: seven two-character cells and six separators.
const MONTH_WIDTH: usize = 7 * 2 + 6;

#[derive(Debug, Clone)]
pub struct CmdCalendar {
    pub date: Option<Date>,
    pub months: u8,
    pub hide_padding: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show the month grid, weeks starting on Saturday")
            .arg(DateArgs::date())
            .arg(
                arg!(-n --months <MONTHS> "Number of consecutive months to show")
                    .value_parser(value_parser!(u8).range(1..=24))
                    .default_value("1"),
            )
            .arg(arg!(--"hide-padding" "Leave days of neighbouring months blank"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: DateArgs::get_date(matches),
            months: matches.get_one("months").copied().unwrap_or(1),
            hide_padding: matches.get_flag("hide-padding"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    /// The calendar needs no routine file.
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering calendar...");

        let today = Zoned::now().date();
        let months = self.strip(self.date.unwrap_or(today));
        match self.output_format {
            ArgOutputFormat::Json => {
                let months: Vec<_> = months.iter().collect();
                println!("{}", serde_json::to_string_pretty(&months)?);
            }
            ArgOutputFormat::Table => {
                for (i, month) in months.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    print!("{}", render_month(month, Some(today), self.hide_padding));
                }
            }
        }
        Ok(())
    }

    fn strip(&self, date: Date) -> WindowStrip<CalendarMonth> {
        let mut strip = WindowStrip::new(build_month(date));
        for _ in 1..self.months {
            let Some(last) = strip.last().map(|m| m.id.clone()) else {
                break;
            };
            if !strip.extend(Edge::Trailing, &last) {
                break;
            }
        }
        strip
    }
}

/// Renders one month grid, dimming padding days and highlighting `today`.
pub fn render_month(month: &CalendarMonth, today: Option<Date>, hide_padding: bool) -> String {
    let mut lines = Vec::with_capacity(month.weeks.len() + 2);
    lines.push(format!("{:^width$}", month.id, width = MONTH_WIDTH).bold().to_string());

    let header: Vec<_> = (0..7)
        .map(|i| weekday_abbr(WEEK_START.wrapping_add(i)))
        .collect();
    lines.push(header.join(" ").italic().to_string());

    for week in &month.weeks {
        let cells: Vec<_> = week
            .days
            .iter()
            .map(|&day| {
                let cell = format!("{:>2}", day.day());
                if !month.contains(day) {
                    match hide_padding {
                        true => "  ".to_string(),
                        false => cell.bright_black().to_string(),
                    }
                } else if Some(day) == today {
                    cell.reversed().to_string()
                } else {
                    cell
                }
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn weekday_abbr(day: Weekday) -> &'static str {
    match day {
        Weekday::Saturday => "Sa",
        Weekday::Sunday => "Su",
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
    }
}
