// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;

use jiff::ToSpan;
use jiff::civil::Date;

use crate::calendar::week::{
    CalendarWeek, REFERENCE_HOUR, WeekOrder, current_week, is_same_month, nearest_saturday,
    next_week, previous_week,
};

/// Upper bound on weeks added on either side of the middle week; a month never needs more
/// than three.
const MAX_WEEKS_PER_SIDE: usize = 4;

const MID_MONTH_DAY: i8 = 15;

/// A month grid of whole Saturday-first weeks.
///
/// The first and last week usually reach into the neighbouring months; use
/// [`CalendarMonth::contains`] to tell those days apart.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CalendarMonth {
    /// `"October 2025"` style name.
    pub id: String,
    pub weeks: Vec<CalendarWeek>,

    /// The 15th of the month the grid was built around.
    pub anchor: Date,
}

impl CalendarMonth {
    /// Whether `date` is in the nominal month, as opposed to a padding day of the grid.
    pub fn contains(&self, date: Date) -> bool {
        is_same_month(date, self.anchor)
    }

    /// Every day of the grid in order, padding days included.
    pub fn days(&self) -> impl Iterator<Item = Date> + '_ {
        self.weeks.iter().flat_map(|w| w.days)
    }

    /// The month before, `None` if it lies outside the supported date range.
    pub fn previous(&self) -> Option<Self> {
        match self.anchor.checked_sub(1.months()) {
            Ok(date) => Some(build_month(date)),
            Err(err) => {
                tracing::warn!(anchor = %self.anchor, %err, "no previous month");
                None
            }
        }
    }

    /// The month after, `None` if it lies outside the supported date range.
    pub fn next(&self) -> Option<Self> {
        match self.anchor.checked_add(1.months()) {
            Ok(date) => Some(build_month(date)),
            Err(err) => {
                tracing::warn!(anchor = %self.anchor, %err, "no next month");
                None
            }
        }
    }
}

/// Builds the grid of the month containing `date`.
///
/// Starts from the week around the 15th and grows outwards one week at a time until both
/// the first and the last day of the month are covered.
pub fn build_month(date: Date) -> CalendarMonth {
    let anchor = Date::new(date.year(), date.month(), MID_MONTH_DAY).unwrap_or(date);
    let start = nearest_saturday(anchor.at(REFERENCE_HOUR, 0, 0, 0)).date();

    let mut weeks = VecDeque::with_capacity(6);
    weeks.push_back(CalendarWeek::new(current_week(start), WeekOrder::Current));

    for _ in 0..MAX_WEEKS_PER_SIDE {
        let first = weeks[0].first();
        let days = previous_week(first);
        if !is_ascending(&days) || days[6] >= first {
            break; // no room left before
        }

        let (head_in, tail_in) = (is_same_month(days[0], anchor), is_same_month(days[6], anchor));
        if tail_in {
            weeks.push_front(CalendarWeek::new(days, WeekOrder::Previous));
        }
        if !head_in || !tail_in {
            break;
        }
    }

    for _ in 0..MAX_WEEKS_PER_SIDE {
        let last = weeks[weeks.len() - 1].last();
        let days = next_week(last);
        if !is_ascending(&days) || days[0] <= last {
            break; // no room left after
        }

        let (head_in, tail_in) = (is_same_month(days[0], anchor), is_same_month(days[6], anchor));
        if head_in {
            weeks.push_back(CalendarWeek::new(days, WeekOrder::Next));
        }
        if !head_in || !tail_in {
            break;
        }
    }

    let id = anchor.strftime("%B %Y").to_string();
    tracing::debug!(id = %id, weeks = weeks.len(), "built month");
    CalendarMonth {
        id,
        weeks: weeks.into(),
        anchor,
    }
}

/// False when date arithmetic fell back to the anchor somewhere in the week.
fn is_ascending(days: &[Date; 7]) -> bool {
    days.windows(2).all(|pair| pair[0] < pair[1])
}
