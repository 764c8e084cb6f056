// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Weekly export workflow tests: the week list behind PDF export, hour totals and reminders.

use jiff::civil::Weekday;
use routine_core::{
    DEFAULT_LEAD_MINUTES, GroupingPolicy, RoutineQuery, SearchContext, format_minutes,
    merge_weekly, plan_alerts, total_minutes,
};

use crate::common::sample_sessions;

#[test]
fn weekly_section_routine_is_day_ordered() {
    let sessions = sample_sessions();
    let query = RoutineQuery::new(SearchContext::Section("61_N".into()));

    let blocks = query.run_weekly(&sessions);
    let summary: Vec<_> = blocks
        .iter()
        .map(|b| (b.day, b.course_code.as_str(), b.start_time.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Weekday::Saturday, "CSE101", "08:30"),
            (Weekday::Saturday, "CSE102", "01:00"),
            (Weekday::Sunday, "CSE101L", "02:30"),
            (Weekday::Tuesday, "MAT201", "10:00"),
        ]
    );
}

#[test]
fn weekly_never_contains_friday() {
    let sessions = sample_sessions();
    assert!(sessions.iter().any(|s| s.day == Weekday::Friday));

    let blocks = merge_weekly(&sessions, GroupingPolicy::SectionOriented);
    assert!(!blocks.is_empty());
    assert!(blocks.iter().all(|b| b.day != Weekday::Friday));
}

#[test]
fn weekly_hour_total() {
    let sessions = sample_sessions();
    let blocks = RoutineQuery::new(SearchContext::Section("61_N".into())).run_weekly(&sessions);

    let minutes = total_minutes(&blocks);
    assert_eq!(minutes, 180 + 90 + 180 + 90);
    assert_eq!(format_minutes(minutes), "9h");
}

#[test]
fn teacher_weekly_routine() {
    let sessions = sample_sessions();
    let blocks = RoutineQuery::new(SearchContext::Teacher("Anika".into())).run_weekly(&sessions);

    let summary: Vec<_> = blocks
        .iter()
        .map(|b| (b.day, b.section.as_str(), b.time_range()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Weekday::Saturday, "61_N", "8:30 AM - 11:30 AM".to_string()),
            (Weekday::Sunday, "61_N1", "2:30 PM - 5:30 PM".to_string()),
            (Weekday::Monday, "62_K", "11:30 AM - 1:00 PM".to_string()),
        ]
    );
}

#[test]
fn reminders_for_weekly_routine() {
    let sessions = sample_sessions();
    let blocks = RoutineQuery::new(SearchContext::Section("61_N".into())).run_weekly(&sessions);

    let alerts = plan_alerts(&blocks, DEFAULT_LEAD_MINUTES);
    let summary: Vec<_> = alerts
        .iter()
        .map(|a| (a.identifier.as_str(), a.hour, a.minute))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("SATURDAY-CSE101-61_N", 8, 15),
            ("SATURDAY-CSE102-61_N", 12, 45),
            ("SUNDAY-CSE101L-61_N1", 14, 15),
            ("TUESDAY-MAT201-61_N", 9, 45),
        ]
    );
    assert!(alerts.iter().all(|a| a.repeats_weekly));
}

#[test]
fn weekly_blocks_serialize_for_export() {
    let sessions = sample_sessions();
    let blocks = RoutineQuery::new(SearchContext::Section("61_N".into())).run_weekly(&sessions);

    let json = serde_json::to_value(&blocks).unwrap();
    assert_eq!(json[0]["day"], "SATURDAY");
    assert_eq!(json[0]["startTime"], "08:30");
    assert_eq!(json[0]["sourceSessions"].as_array().unwrap().len(), 2);
}
