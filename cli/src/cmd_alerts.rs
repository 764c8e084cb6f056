// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use routine_core::{GroupingPolicy, Routine, SearchContext};

use crate::alert_formatter::AlertFormatter;
use crate::arg::{ArgOutputFormat, SearchArgs};

#[derive(Debug, Clone)]
pub struct CmdAlerts {
    pub search: Option<SearchContext>,
    pub saved: Option<GroupingPolicy>,
    pub output_format: ArgOutputFormat,
}

impl CmdAlerts {
    pub const NAME: &str = "alerts";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Plan the weekly class reminders")
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
        tracing::debug!(?self, "planning alerts...");

        let context = routine.search(self.search, self.saved)?;
        let alerts = routine.alerts(context);

        if self.output_format == ArgOutputFormat::Table {
            let lead = routine.config().alert_lead_minutes;
            println!("🔔 {}", format!("Reminders: {lead} minutes before class").bold());
            if alerts.is_empty() {
                println!("No reminders");
                return Ok(());
            }
        }

        print!("{}", AlertFormatter::new(self.output_format).format(&alerts));
        Ok(())
    }
}
