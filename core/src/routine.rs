// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use jiff::civil::{Date, Weekday};

use crate::alert::{ClassAlert, plan_alerts};
use crate::config::Config;
use crate::error::RoutineError;
use crate::io::load_sessions;
use crate::merge::{GroupingPolicy, MergedBlock};
use crate::search::{RoutineQuery, SearchContext};
use crate::session::ScheduleSession;

/// A loaded routine: the configuration and every session of the routine file.
#[derive(Debug, Clone)]
pub struct Routine {
    now: Zoned,
    config: Config,
    sessions: Vec<ScheduleSession>,
}

impl Routine {
    /// Normalizes `config` and loads the routine file it points to.
    pub async fn new(mut config: Config) -> Result<Self, RoutineError> {
        config.normalize()?;
        let sessions = load_sessions(&config.routine_path).await?;
        tracing::debug!(count = sessions.len(), "routine loaded");
        Ok(Self::with_sessions(config, sessions))
    }

    /// A routine over sessions that are already in memory.
    pub fn with_sessions(config: Config, sessions: Vec<ScheduleSession>) -> Self {
        Self {
            now: Zoned::now(),
            config,
            sessions,
        }
    }

    /// The current time in the routine instance.
    pub fn now(&self) -> &Zoned {
        &self.now
    }

    /// Today's date in the system time zone.
    pub fn today(&self) -> Date {
        self.now.date()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &[ScheduleSession] {
        &self.sessions
    }

    /// The given search, or a saved one from the configuration. `saved` picks which saved
    /// search is preferred, defaulting to the configured policy.
    pub fn search(
        &self,
        context: Option<SearchContext>,
        saved: Option<GroupingPolicy>,
    ) -> Result<SearchContext, RoutineError> {
        let policy = saved.unwrap_or(self.config.policy);
        context
            .or_else(|| self.config.saved_search(policy))
            .ok_or_else(|| {
                RoutineError::Config("no search given and no section or teacher saved".into())
            })
    }

    /// Merged blocks of one weekday.
    pub fn day(&self, context: SearchContext, day: Weekday) -> Vec<MergedBlock> {
        RoutineQuery::new(context).with_day(day).run(&self.sessions)
    }

    /// Merged blocks of the teaching week, Friday excluded.
    pub fn week(&self, context: SearchContext) -> Vec<MergedBlock> {
        RoutineQuery::new(context).run_weekly(&self.sessions)
    }

    /// Weekly reminders with the configured lead time.
    pub fn alerts(&self, context: SearchContext) -> Vec<ClassAlert> {
        plan_alerts(&self.week(context), self.config.alert_lead_minutes)
    }
}
