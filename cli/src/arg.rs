// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::civil::Date;
use routine_core::{GroupingPolicy, SearchContext};

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    #[default]
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// `--section` / `--teacher`, falling back to the saved search when neither is given.
#[derive(Debug, Clone, Copy)]
pub struct SearchArgs;

impl SearchArgs {
    pub fn section() -> Arg {
        arg!(-s --section <SECTION> "Section to show, numbered sub-sections included")
            .conflicts_with("teacher")
    }

    pub fn teacher() -> Arg {
        arg!(-t --teacher <TEACHER> "Teacher initial, or part of the teacher's name")
    }

    pub fn saved() -> Arg {
        arg!(--saved <KIND> "Saved search to use when none is given, overriding the configured policy")
            .value_parser(value_parser!(GroupingPolicy))
    }

    pub fn get_saved(matches: &ArgMatches) -> Option<GroupingPolicy> {
        matches.get_one("saved").copied()
    }

    pub fn get(matches: &ArgMatches) -> Option<SearchContext> {
        if let Some(section) = matches.get_one::<String>("section") {
            Some(SearchContext::Section(section.clone()))
        } else {
            matches
                .get_one::<String>("teacher")
                .map(|t| SearchContext::Teacher(t.clone()))
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DateArgs;

impl DateArgs {
    pub fn date() -> Arg {
        arg!(-d --date <DATE> "Date to show (YYYY-MM-DD), defaults to today")
            .value_parser(parse_date)
    }

    pub fn get_date(matches: &ArgMatches) -> Option<Date> {
        matches.get_one("date").copied()
    }
}

fn parse_date(s: &str) -> Result<Date, String> {
    s.trim()
        .parse::<Date>()
        .map_err(|e| format!("invalid date '{s}', expected YYYY-MM-DD: {e}"))
}
