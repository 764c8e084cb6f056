// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Slot labels, their canonical ordering and display helpers.
//!
//! Slot labels are 2-digit-hour `HH:MM` strings without an AM/PM marker. Classes run from
//! 08:30 to 17:30, so hours 8 to 11 are read as morning and hours 1 to 7 as afternoon.

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

use crate::merge::MergedBlock;

/// Class start labels in teaching order. This is not lexical order: "01:00" comes after "11:30".
pub const SLOT_ORDER: [&str; 6] = ["08:30", "10:00", "11:30", "01:00", "02:30", "04:00"];

const ROOM_LAB_SUFFIX: &str = "(COM LAB)";

/// Position of a label in [`SLOT_ORDER`], if it is one of the canonical starts.
pub fn slot_rank(label: &str) -> Option<usize> {
    let label = label.trim();
    SLOT_ORDER.iter().position(|slot| *slot == label)
}

/// Orders two slot labels: canonical labels by teaching order, then every unknown label by raw
/// string comparison.
pub fn compare_slots(a: &str, b: &str) -> Ordering {
    match (slot_rank(a), slot_rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Minutes since midnight of a slot label, with the afternoon inference applied.
pub fn to_minutes(label: &str) -> Option<i64> {
    let (hour, minute) = parse_label(label)?;
    Some(infer_hour(hour) * 60 + minute)
}

/// Renders a slot label as a 12-hour clock string, e.g. `"01:00"` becomes `"1:00 PM"`.
///
/// Labels that do not look like `HH:MM` are returned unchanged.
pub fn format_12_hour(label: &str) -> String {
    let Some((hour, minute)) = parse_label(label) else {
        tracing::debug!(label, "unparseable slot label, leaving as is");
        return label.to_string();
    };

    let hour = infer_hour(hour);
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{minute:02} {meridiem}")
}

/// Human readable class length, `"N/A"` when the span is empty, negative or unparseable.
pub fn duration(start: &str, end: &str) -> String {
    match span_minutes(start, end) {
        Some(minutes) if minutes > 0 => format_minutes(minutes),
        _ => "N/A".to_string(),
    }
}

/// Class length in minutes, `0` when the span is empty, negative or unparseable.
pub fn duration_minutes(start: &str, end: &str) -> i64 {
    match span_minutes(start, end) {
        Some(minutes) if minutes > 0 => minutes,
        _ => 0,
    }
}

/// Sum of class lengths over a list of blocks.
pub fn total_minutes(blocks: &[MergedBlock]) -> i64 {
    blocks
        .iter()
        .map(|block| duration_minutes(&block.start_time, &block.end_time))
        .sum()
}

/// Renders a minute count as `"1h 30m"`, `"3h"` or `"45m"`.
pub fn format_minutes(minutes: i64) -> String {
    let (hours, minutes) = (minutes / 60, minutes % 60);
    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Strips the computer-lab marker from a room name.
pub fn clean_room(room: &str) -> String {
    room.replace(ROOM_LAB_SUFFIX, "").trim().to_string()
}

fn span_minutes(start: &str, end: &str) -> Option<i64> {
    Some(to_minutes(end)? - to_minutes(start)?)
}

/// Hours 1 to 7 are afternoon slots stored without the PM offset.
fn infer_hour(hour: i64) -> i64 {
    match hour {
        1..=7 => hour + 12,
        _ => hour,
    }
}

fn parse_label(label: &str) -> Option<(i64, i64)> {
    const RE: &str = r"^\s*(\d{1,2}):(\d{2})\s*$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    let captures = re.captures(label)?;
    let hour = captures[1].parse::<i64>().ok()?;
    let minute = captures[2].parse::<i64>().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}
