// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use jiff::civil::Weekday;

use crate::session::{ScheduleSession, weekday_name};
use crate::time::{clean_room, compare_slots, duration, format_12_hour};

/// Teaching days in display order for weekly views. There are no classes on Friday.
pub const WEEKLY_DAY_ORDER: [Weekday; 6] = [
    Weekday::Saturday,
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
];

/// Which fields identify sessions that belong to the same class meeting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum GroupingPolicy {
    /// Student view: teacher initial, course code and section.
    #[default]
    #[serde(rename = "section")]
    #[cfg_attr(feature = "clap", clap(name = "section"))]
    SectionOriented,

    /// Teacher view: section and course code, the teacher being fixed by the search.
    #[serde(rename = "teacher")]
    #[cfg_attr(feature = "clap", clap(name = "teacher"))]
    TeacherOriented,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct GroupKey<'a> {
    day: u8,
    teacher_initial: Option<&'a str>,
    course_code: &'a str,
    section: &'a str,
}

impl<'a> GroupKey<'a> {
    fn new(policy: GroupingPolicy, session: &'a ScheduleSession) -> Self {
        let teacher_initial = match policy {
            GroupingPolicy::SectionOriented => Some(session.teacher_initial.as_str()),
            GroupingPolicy::TeacherOriented => None,
        };
        Self {
            day: day_position(session.day),
            teacher_initial,
            course_code: &session.course_code,
            section: &session.section,
        }
    }
}

/// One displayed class entry summarizing one or more sessions that share a grouping key.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedBlock {
    #[serde(with = "weekday_name")]
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub course_title: String,
    pub course_code: String,
    pub section: String,
    pub teacher_initial: String,
    pub teacher_name: String,
    pub teacher_designation: String,
    pub teacher_room_location: String,
    pub teacher_phone: String,
    pub teacher_email: String,
    pub teacher_image_url: String,
    pub room: String,

    /// The summarized sessions in slot order.
    pub source_sessions: Vec<ScheduleSession>,
}

impl MergedBlock {
    /// Builds a block from a non-empty group, sorting it into slot order first.
    fn from_group(mut group: Vec<&ScheduleSession>) -> Option<Self> {
        group.sort_by(|a, b| compare_slots(&a.start_time, &b.start_time).then(a.id.cmp(&b.id)));
        let first = *group.first()?;
        let last = *group.last()?;

        Some(Self {
            day: first.day,
            start_time: first.start_time.clone(),
            end_time: last.end_time.clone(),
            course_title: first.course_title.clone(),
            course_code: first.course_code.clone(),
            section: first.section.clone(),
            teacher_initial: first.teacher_initial.clone(),
            teacher_name: first.teacher_name.clone(),
            teacher_designation: first.teacher_designation.clone(),
            teacher_room_location: first.teacher_room_location.clone(),
            teacher_phone: first.teacher_phone.clone(),
            teacher_email: first.teacher_email.clone(),
            teacher_image_url: first.teacher_image_url.clone(),
            room: first.room.clone(),
            source_sessions: group.into_iter().cloned().collect(),
        })
    }

    /// Room name without the lab marker.
    pub fn display_room(&self) -> String {
        clean_room(&self.room)
    }

    /// `"8:30 AM - 11:30 AM"` style range.
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            format_12_hour(&self.start_time),
            format_12_hour(&self.end_time)
        )
    }

    pub fn duration(&self) -> String {
        duration(&self.start_time, &self.end_time)
    }
}

/// Merges sessions that share a grouping key on the same day into blocks.
///
/// Grouping is by key only: two sessions of the same class on one day collapse into a single
/// block even when slots between them are free. With `day` set, only that weekday is kept.
/// The result is ordered by weekday (Saturday first) and then by slot order.
#[tracing::instrument(skip(sessions), fields(total = sessions.len()))]
pub fn merge_sessions(
    sessions: &[ScheduleSession],
    policy: GroupingPolicy,
    day: Option<Weekday>,
) -> Vec<MergedBlock> {
    let mut groups: BTreeMap<GroupKey<'_>, Vec<&ScheduleSession>> = BTreeMap::new();
    for session in sessions.iter().filter(|s| day.is_none_or(|d| s.day == d)) {
        groups
            .entry(GroupKey::new(policy, session))
            .or_default()
            .push(session);
    }

    let mut blocks: Vec<_> = groups
        .into_values()
        .filter_map(MergedBlock::from_group)
        .collect();
    blocks.sort_by(|a, b| {
        day_position(a.day)
            .cmp(&day_position(b.day))
            .then_with(|| compare_slots(&a.start_time, &b.start_time))
    });

    tracing::debug!(count = blocks.len(), "merged blocks");
    blocks
}

/// Merges a whole week, one teaching day after another in [`WEEKLY_DAY_ORDER`].
///
/// Sessions on a day missing from that order (Friday) never appear in the output.
pub fn merge_weekly(sessions: &[ScheduleSession], policy: GroupingPolicy) -> Vec<MergedBlock> {
    let skipped = sessions
        .iter()
        .filter(|s| !WEEKLY_DAY_ORDER.contains(&s.day))
        .count();
    if skipped > 0 {
        tracing::debug!(skipped, "ignoring sessions outside the teaching week");
    }

    WEEKLY_DAY_ORDER
        .into_iter()
        .flat_map(|day| merge_sessions(sessions, policy, Some(day)))
        .collect()
}

/// Days since Saturday, the first day of the week.
pub(crate) fn day_position(day: Weekday) -> u8 {
    let offset = day.to_monday_zero_offset() - Weekday::Saturday.to_monday_zero_offset();
    offset.rem_euclid(7) as u8
}
