// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use routine_core::{RawSession, ScheduleSession, parse_sessions};

/// A small week of classes for two sections and three teachers.
///
/// Section 61_N has a split double session of CSE101 on Saturday and a lab in sub-section
/// 61_N1 on Sunday. The Friday record must never show up in weekly views.
pub const SAMPLE_ROUTINE: &str = r#"[
  {"id": 1, "day": "SATURDAY", "startTime": "08:30", "endTime": "10:00", "section": "61_N",
   "room": "AB4-301", "teacherInitial": "ABC", "courseCode": "CSE101",
   "courseTitle": "Structured Programming", "teacherName": "Anika Bashar Chowdhury"},
  {"id": 2, "day": "SATURDAY", "startTime": "10:00", "endTime": "11:30", "section": "61_N",
   "room": "AB4-301", "teacherInitial": "ABC", "courseCode": "CSE101",
   "courseTitle": "Structured Programming", "teacherName": "Anika Bashar Chowdhury"},
  {"id": 3, "day": "SATURDAY", "startTime": "01:00", "endTime": "02:30", "section": "61_N",
   "room": "KT-512 (COM LAB)", "teacherInitial": "MHR", "courseCode": "CSE102",
   "courseTitle": "Discrete Mathematics", "teacherName": "Mahfuzur Rahman"},
  {"id": 4, "day": "SUNDAY", "startTime": "02:30", "endTime": "04:00", "section": "61_N1",
   "room": "KT-514 (COM LAB)", "teacherInitial": "ABC", "courseCode": "CSE101L",
   "courseTitle": "Structured Programming Lab", "teacherName": "Anika Bashar Chowdhury"},
  {"id": 5, "day": "SUNDAY", "startTime": "04:00", "endTime": "05:30", "section": "61_N1",
   "room": "KT-514 (COM LAB)", "teacherInitial": "ABC", "courseCode": "CSE101L",
   "courseTitle": "Structured Programming Lab", "teacherName": "Anika Bashar Chowdhury"},
  {"id": 6, "day": "MONDAY", "startTime": "11:30", "endTime": "01:00", "section": "62_K",
   "room": "AB4-302", "teacherInitial": "ABC", "courseCode": "CSE101",
   "courseTitle": "Structured Programming", "teacherName": "Anika Bashar Chowdhury"},
  {"id": 7, "day": "FRIDAY", "startTime": "08:30", "endTime": "10:00", "section": "61_N",
   "room": "AB4-301", "teacherInitial": "SKD", "courseCode": "MAT201",
   "courseTitle": "Linear Algebra"},
  {"id": 8, "day": "TUESDAY", "startTime": "10:00", "endTime": "11:30", "section": "61_N",
   "teacherInitial": "SKD", "courseCode": "MAT201"}
]"#;

/// Sessions of [`SAMPLE_ROUTINE`].
#[must_use]
pub fn sample_sessions() -> Vec<ScheduleSession> {
    parse_sessions(SAMPLE_ROUTINE).expect("sample routine should parse")
}

/// Builder for a single normalized session.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    raw: RawSession,
}

impl SessionBuilder {
    /// Starts a session of CSE101 for section 61_N taught by ABC.
    #[must_use]
    pub fn new(id: i64, day: &str) -> Self {
        Self {
            raw: RawSession {
                id,
                day: Some(day.to_string()),
                section: Some("61_N".to_string()),
                course_code: Some("CSE101".to_string()),
                teacher_initial: Some("ABC".to_string()),
                ..Default::default()
            },
        }
    }

    #[must_use]
    pub fn slot(mut self, start: &str, end: &str) -> Self {
        self.raw.start_time = Some(start.to_string());
        self.raw.end_time = Some(end.to_string());
        self
    }

    #[must_use]
    pub fn section(mut self, section: &str) -> Self {
        self.raw.section = Some(section.to_string());
        self
    }

    #[must_use]
    pub fn course(mut self, code: &str) -> Self {
        self.raw.course_code = Some(code.to_string());
        self
    }

    #[must_use]
    pub fn teacher(mut self, initial: &str) -> Self {
        self.raw.teacher_initial = Some(initial.to_string());
        self
    }

    #[must_use]
    pub fn build(self) -> ScheduleSession {
        self.raw.normalize().expect("builder always sets a weekday")
    }
}
