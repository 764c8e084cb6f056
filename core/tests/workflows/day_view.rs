// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Day view workflow tests: search a section or a teacher and merge one day.

use jiff::civil::Weekday;
use routine_core::{
    GroupingPolicy, RoutineQuery, SearchContext, UNKNOWN_TEACHER, load_sessions, merge_sessions,
};

use crate::common::{SAMPLE_ROUTINE, SessionBuilder, sample_sessions, setup_temp_routine};

#[tokio::test]
async fn section_day_from_file() {
    // Arrange
    let routine = setup_temp_routine(SAMPLE_ROUTINE).await.unwrap();
    let sessions = load_sessions(&routine.routine_path).await.unwrap();

    // Act
    let query =
        RoutineQuery::new(SearchContext::Section("61_N".into())).with_day(Weekday::Saturday);
    let blocks = query.run(&sessions);

    // Assert
    assert_eq!(blocks.len(), 2);

    let first = &blocks[0];
    assert_eq!(first.course_code, "CSE101");
    assert_eq!((first.start_time.as_str(), first.end_time.as_str()), ("08:30", "11:30"));
    let ids: Vec<_> = first.source_sessions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(first.time_range(), "8:30 AM - 11:30 AM");

    let second = &blocks[1];
    assert_eq!(second.course_code, "CSE102");
    assert_eq!(second.display_room(), "KT-512");
    assert_eq!(second.duration(), "1h 30m");
}

#[test]
fn section_search_includes_numbered_sub_sections() {
    let sessions = sample_sessions();
    let query = RoutineQuery::new(SearchContext::Section("61_n".into())).with_day(Weekday::Sunday);

    let blocks = query.run(&sessions);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].section, "61_N1");
    assert_eq!(blocks[0].start_time, "02:30");
    assert_eq!(blocks[0].end_time, "05:30");
    assert_eq!(blocks[0].duration(), "3h");
}

#[test]
fn teacher_day_groups_by_section_and_course() {
    let sessions = sample_sessions();
    let query = RoutineQuery::new(SearchContext::Teacher("abc".into())).with_day(Weekday::Monday);

    let blocks = query.run(&sessions);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].section, "62_K");
    assert_eq!(blocks[0].time_range(), "11:30 AM - 1:00 PM");
}

#[test]
fn missing_fields_show_placeholders() {
    let sessions = sample_sessions();
    let query =
        RoutineQuery::new(SearchContext::Section("61_N".into())).with_day(Weekday::Tuesday);

    let blocks = query.run(&sessions);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].room, "N/A");
    assert_eq!(blocks[0].teacher_name, UNKNOWN_TEACHER);
    assert_eq!(blocks[0].course_title, "Unknown");
}

#[test]
fn contiguous_pair_merges_into_one_block() {
    let sessions = vec![
        SessionBuilder::new(1, "SATURDAY").slot("08:30", "10:00").build(),
        SessionBuilder::new(2, "SATURDAY").slot("10:00", "11:30").build(),
    ];

    let blocks = merge_sessions(&sessions, GroupingPolicy::SectionOriented, None);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].start_time, "08:30");
    assert_eq!(blocks[0].end_time, "11:30");
    assert_eq!(blocks[0].source_sessions, sessions);
}

#[test]
fn split_sessions_with_same_key_still_merge() {
    let sessions = vec![
        SessionBuilder::new(1, "MONDAY").slot("02:30", "04:00").build(),
        SessionBuilder::new(2, "MONDAY").slot("08:30", "10:00").build(),
    ];

    let blocks = merge_sessions(&sessions, GroupingPolicy::SectionOriented, Some(Weekday::Monday));
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].start_time, "08:30");
    assert_eq!(blocks[0].end_time, "04:00");
    let ids: Vec<_> = blocks[0].source_sessions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn different_teachers_stay_apart_for_students() {
    let sessions = vec![
        SessionBuilder::new(1, "MONDAY").slot("08:30", "10:00").build(),
        SessionBuilder::new(2, "MONDAY")
            .slot("10:00", "11:30")
            .teacher("XYZ")
            .build(),
        SessionBuilder::new(3, "MONDAY")
            .slot("10:00", "11:30")
            .course("CSE102")
            .section("61_N")
            .build(),
    ];

    let blocks = merge_sessions(&sessions, GroupingPolicy::SectionOriented, None);
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].start_time, "08:30");
}
