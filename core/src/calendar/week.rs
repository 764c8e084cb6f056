// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::{Date, DateTime, Weekday};

/// The first day of every calendar week.
pub const WEEK_START: Weekday = Weekday::Saturday;

/// Time of day that week anchors are pinned to, away from midnight transitions.
pub(crate) const REFERENCE_HOUR: i8 = 9;

/// Position of a week relative to the window it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekOrder {
    Previous,
    Current,
    Next,
}

/// Seven consecutive days starting on [`WEEK_START`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CalendarWeek {
    pub id: String,
    pub days: [Date; 7],
    pub order: WeekOrder,
}

impl CalendarWeek {
    pub fn new(days: [Date; 7], order: WeekOrder) -> Self {
        Self {
            id: week_id(days[6]),
            days,
            order,
        }
    }

    /// The week containing `date`.
    pub fn containing(date: Date) -> Self {
        let start = nearest_saturday(date.at(REFERENCE_HOUR, 0, 0, 0)).date();
        Self::new(current_week(start), WeekOrder::Current)
    }

    pub fn first(&self) -> Date {
        self.days[0]
    }

    pub fn last(&self) -> Date {
        self.days[6]
    }

    pub fn contains(&self, date: Date) -> bool {
        self.days.contains(&date)
    }

    /// The week before this one.
    pub fn previous(&self) -> Self {
        Self::new(previous_week(self.first()), WeekOrder::Previous)
    }

    /// The week after this one.
    pub fn next(&self) -> Self {
        Self::new(next_week(self.last()), WeekOrder::Next)
    }
}

/// ISO week number and year of the last day, e.g. `2025-W07`.
fn week_id(last: Date) -> String {
    let iso = last.iso_week_date();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// The most recent Saturday on or before `dt`, at the reference hour.
pub fn nearest_saturday(dt: DateTime) -> DateTime {
    let back = (dt.weekday().to_monday_zero_offset() - WEEK_START.to_monday_zero_offset())
        .rem_euclid(7);
    shift(dt.date(), -i64::from(back)).at(REFERENCE_HOUR, 0, 0, 0)
}

/// Seven days starting at `date`.
pub fn current_week(date: Date) -> [Date; 7] {
    std::array::from_fn(|i| shift(date, i as i64))
}

/// Seven days starting the day after `date`.
pub fn next_week(date: Date) -> [Date; 7] {
    std::array::from_fn(|i| shift(date, i as i64 + 1))
}

/// Seven days ending the day before `date`, in chronological order.
pub fn previous_week(date: Date) -> [Date; 7] {
    std::array::from_fn(|i| shift(date, i as i64 - 7))
}

/// Whether two dates share year and month.
pub fn is_same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Moves `date` by `days`, keeping `date` itself when the result is out of range.
pub(crate) fn shift(date: Date, days: i64) -> Date {
    date.checked_add(days.days()).unwrap_or_else(|err| {
        tracing::warn!(%date, days, %err, "date arithmetic failed, keeping anchor");
        date
    })
}
