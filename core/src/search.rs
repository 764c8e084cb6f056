// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Weekday;

use crate::merge::{GroupingPolicy, MergedBlock, merge_sessions, merge_weekly};
use crate::session::{NOT_AVAILABLE, ScheduleSession, UNKNOWN_TEACHER};

/// What the user searched for. The variant also decides how sessions are grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchContext {
    /// A section such as `61_N`; numbered sub-sections like `61_N1` match too.
    Section(String),

    /// A teacher, by initial or by (part of) the name.
    Teacher(String),
}

impl SearchContext {
    /// The grouping policy of the view this search opens.
    pub fn policy(&self) -> GroupingPolicy {
        match self {
            SearchContext::Section(_) => GroupingPolicy::SectionOriented,
            SearchContext::Teacher(_) => GroupingPolicy::TeacherOriented,
        }
    }

    /// The raw search text.
    pub fn text(&self) -> &str {
        match self {
            SearchContext::Section(text) | SearchContext::Teacher(text) => text,
        }
    }

    /// Whether `session` belongs to this search. Placeholders of missing fields never match.
    pub fn matches(&self, session: &ScheduleSession) -> bool {
        let query = self.text().trim();
        if query.is_empty() {
            return false;
        }

        match self {
            SearchContext::Section(_) => {
                session.section != NOT_AVAILABLE && section_matches(query, &session.section)
            }
            SearchContext::Teacher(_) => {
                let initial = session.teacher_initial != NOT_AVAILABLE
                    && session.teacher_initial.eq_ignore_ascii_case(query);
                let name = session.teacher_name != UNKNOWN_TEACHER
                    && session
                        .teacher_name
                        .to_lowercase()
                        .contains(&query.to_lowercase());
                initial || name
            }
        }
    }
}

fn section_matches(query: &str, section: &str) -> bool {
    let section = section.trim();
    if section.eq_ignore_ascii_case(query) {
        return true;
    }

    // numbered variant: "61_N1" belongs to "61_N"
    match section.get(..query.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(query) => {
            let rest = &section[query.len()..];
            !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

/// A search plus an optional day, the state a routine screen is driven by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineQuery {
    pub context: SearchContext,
    pub day: Option<Weekday>,
}

impl RoutineQuery {
    pub fn new(context: SearchContext) -> Self {
        Self { context, day: None }
    }

    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = Some(day);
        self
    }

    /// Sessions matching the search and the selected day.
    pub fn filter<'a>(
        &'a self,
        sessions: &'a [ScheduleSession],
    ) -> impl Iterator<Item = &'a ScheduleSession> + 'a {
        sessions
            .iter()
            .filter(|s| self.day.is_none_or(|d| s.day == d))
            .filter(|s| self.context.matches(s))
    }

    /// Merged blocks for the search on the selected day, or on every day when none is selected.
    pub fn run(&self, sessions: &[ScheduleSession]) -> Vec<MergedBlock> {
        let matched: Vec<_> = self.filter(sessions).cloned().collect();
        tracing::debug!(query = ?self.context, matched = matched.len(), "filtered sessions");
        merge_sessions(&matched, self.context.policy(), self.day)
    }

    /// Merged blocks for the search over the teaching week; the selected day is ignored.
    pub fn run_weekly(&self, sessions: &[ScheduleSession]) -> Vec<MergedBlock> {
        let matched: Vec<_> = sessions
            .iter()
            .filter(|s| self.context.matches(s))
            .cloned()
            .collect();
        merge_weekly(&matched, self.context.policy())
    }
}
