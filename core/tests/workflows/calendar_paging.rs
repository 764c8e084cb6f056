// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar paging workflow tests: scrolling week and month strips in both directions.

use jiff::civil::{Date, Weekday, date};
use routine_core::{
    CalendarMonth, CalendarWeek, Edge, WindowStrip, build_month, current_week, next_week,
    previous_week,
};

fn assert_consecutive(days: &[Date]) {
    for pair in days.windows(2) {
        assert_eq!(pair[0].tomorrow().unwrap(), pair[1]);
    }
}

fn page(strip: &mut WindowStrip<CalendarWeek>, edge: Edge, times: usize) {
    for _ in 0..times {
        let boundary = match edge {
            Edge::Leading => strip.first(),
            Edge::Trailing => strip.last(),
        }
        .map(|w| w.id.clone())
        .unwrap();
        assert!(strip.extend(edge, &boundary));
    }
}

#[test]
fn week_strip_scrolls_a_year_each_way() {
    let mut strip = WindowStrip::new(CalendarWeek::containing(date(2025, 10, 18)));
    page(&mut strip, Edge::Trailing, 52);
    page(&mut strip, Edge::Leading, 52);
    assert_eq!(strip.len(), 105);

    let days: Vec<_> = strip.iter().flat_map(|w| w.days).collect();
    assert_consecutive(&days);
    assert!(strip.iter().all(|w| w.first().weekday() == Weekday::Saturday));

    let mut ids: Vec<_> = strip.iter().map(|w| w.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 105);
}

#[test]
fn replayed_visibility_events_load_once() {
    let center = CalendarWeek::containing(date(2025, 10, 18));
    let mut strip = WindowStrip::new(center.clone());

    for _ in 0..3 {
        strip.extend(Edge::Trailing, &center.id);
        strip.extend(Edge::Leading, &center.id);
    }
    assert_eq!(strip.len(), 3);
}

#[test]
fn month_strip_covers_consecutive_months() {
    let start = build_month(date(2024, 11, 2));
    let mut strip = WindowStrip::new(start);
    for _ in 0..14 {
        let id = strip.last().unwrap().id.clone();
        assert!(strip.extend(Edge::Trailing, &id));
    }

    let ids: Vec<_> = strip.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids[0], "November 2024");
    assert_eq!(ids[2], "January 2025");
    assert_eq!(ids[14], "January 2026");

    // every day of every nominal month is in its grid
    for month in strip.iter() {
        let inside: Vec<_> = month.days().filter(|d| month.contains(*d)).collect();
        assert_eq!(inside.first(), Some(&month.anchor.first_of_month()));
        assert_eq!(inside.last(), Some(&month.anchor.last_of_month()));
        assert_consecutive(&inside);
    }
}

#[test]
fn month_strip_stops_at_the_end_of_time() {
    let mut strip: WindowStrip<CalendarMonth> = WindowStrip::new(build_month(Date::MAX));
    let id = strip.last().unwrap().id.clone();
    assert!(!strip.extend(Edge::Trailing, &id));
    assert!(strip.extend(Edge::Leading, &id));
    assert_eq!(strip.len(), 2);
}

#[test]
fn three_week_window_has_no_gaps() {
    let mut day = date(2024, 1, 6);
    for _ in 0..60 {
        let current = current_week(day);
        let mut all = previous_week(current[0]).to_vec();
        all.extend(current);
        all.extend(next_week(current[6]));
        assert_eq!(all.len(), 21);
        assert_consecutive(&all);
        day = current[6].tomorrow().unwrap();
    }
}

#[test]
fn trimming_keeps_the_visible_end() {
    let mut strip = WindowStrip::new(CalendarWeek::containing(date(2025, 1, 1)));
    page(&mut strip, Edge::Trailing, 10);
    let last = strip.last().unwrap().id.clone();

    strip.trim(4, Edge::Leading);
    assert_eq!(strip.len(), 4);
    assert_eq!(strip.last().unwrap().id, last);
}
