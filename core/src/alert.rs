// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use jiff::civil::Weekday;

use crate::merge::MergedBlock;
use crate::session::{weekday_name, weekday_str};
use crate::time::{format_12_hour, to_minutes};

/// Minutes before class start that reminders fire by default.
pub const DEFAULT_LEAD_MINUTES: u32 = 15;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A weekly repeating reminder for one class block.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAlert {
    /// `SATURDAY-CSE101-61_N`, stable across reschedules of the same class.
    pub identifier: String,
    #[serde(with = "weekday_name")]
    pub weekday: Weekday,
    pub hour: i8,
    pub minute: i8,
    pub repeats_weekly: bool,
    pub title: String,
    pub body: String,
}

/// Plans one reminder per block, `lead_minutes` before the block starts.
///
/// Blocks with an unreadable start are skipped; when two blocks share an identifier only the
/// first one is kept.
pub fn plan_alerts(blocks: &[MergedBlock], lead_minutes: u32) -> Vec<ClassAlert> {
    let mut seen = HashSet::new();
    let mut alerts = Vec::with_capacity(blocks.len());
    for block in blocks {
        let Some(start) = to_minutes(&block.start_time) else {
            tracing::debug!(start = %block.start_time, course = %block.course_code, "skipping alert, unreadable start");
            continue;
        };

        let identifier = format!(
            "{}-{}-{}",
            weekday_str(block.day),
            block.course_code,
            block.section
        );
        if !seen.insert(identifier.clone()) {
            tracing::debug!(%identifier, teacher = %block.teacher_initial, "duplicate alert identifier, skipping");
            continue;
        }

        let trigger = start - i64::from(lead_minutes);
        let days_back = trigger.div_euclid(MINUTES_PER_DAY);
        let trigger = trigger.rem_euclid(MINUTES_PER_DAY);

        alerts.push(ClassAlert {
            identifier,
            weekday: block.day.wrapping_add(days_back),
            hour: (trigger / 60) as i8,
            minute: (trigger % 60) as i8,
            repeats_weekly: true,
            title: format!("{} starts in {lead_minutes} minutes", block.course_code),
            body: format!(
                "{} ({}) in room {} at {}",
                block.course_title,
                block.section,
                block.display_room(),
                format_12_hour(&block.start_time)
            ),
        });
    }

    tracing::debug!(count = alerts.len(), "planned alerts");
    alerts
}
