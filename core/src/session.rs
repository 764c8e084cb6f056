// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Weekday;

/// Placeholder for any missing text field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a missing course title.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for a missing teacher name.
pub const UNKNOWN_TEACHER: &str = "Unknown Teacher";

/// One scheduled class session, a single timetable slot.
///
/// Every field is concrete: absent values have already been replaced with placeholders by
/// [`RawSession::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSession {
    pub id: i64,
    #[serde(with = "weekday_name")]
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub section: String,
    pub room: String,
    pub teacher_initial: String,
    pub course_code: String,
    pub course_title: String,
    pub teacher_name: String,
    pub teacher_designation: String,
    pub teacher_email: String,
    pub teacher_phone: String,
    pub teacher_room_location: String,
    pub teacher_image_url: String,
}

/// A schedule record as it arrives from storage, with every descriptive field optional.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSession {
    pub id: i64,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default, alias = "start_time")]
    pub start_time: Option<String>,
    #[serde(default, alias = "end_time")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default, alias = "teacher_initial")]
    pub teacher_initial: Option<String>,
    #[serde(default, alias = "course_code")]
    pub course_code: Option<String>,
    #[serde(default, alias = "course_title")]
    pub course_title: Option<String>,
    #[serde(default, alias = "teacher_name")]
    pub teacher_name: Option<String>,
    #[serde(default, alias = "teacher_designation")]
    pub teacher_designation: Option<String>,
    #[serde(default, alias = "teacher_email")]
    pub teacher_email: Option<String>,
    #[serde(default, alias = "teacher_phone")]
    pub teacher_phone: Option<String>,
    #[serde(default, alias = "teacher_room_location")]
    pub teacher_room_location: Option<String>,
    #[serde(default, alias = "teacher_image_url")]
    pub teacher_image_url: Option<String>,
}

impl RawSession {
    /// Fills in placeholders for absent fields.
    ///
    /// Returns `None` when the weekday is missing or unrecognized, as such a session cannot
    /// belong to any day view.
    pub fn normalize(self) -> Option<ScheduleSession> {
        let Some(day) = self.day.as_deref().and_then(parse_weekday) else {
            tracing::warn!(id = self.id, day = ?self.day, "session has no usable weekday, dropping");
            return None;
        };

        Some(ScheduleSession {
            id: self.id,
            day,
            start_time: or_default(self.start_time, NOT_AVAILABLE),
            end_time: or_default(self.end_time, NOT_AVAILABLE),
            section: or_default(self.section, NOT_AVAILABLE),
            room: or_default(self.room, NOT_AVAILABLE),
            teacher_initial: or_default(self.teacher_initial, NOT_AVAILABLE),
            course_code: or_default(self.course_code, NOT_AVAILABLE),
            course_title: or_default(self.course_title, UNKNOWN),
            teacher_name: or_default(self.teacher_name, UNKNOWN_TEACHER),
            teacher_designation: or_default(self.teacher_designation, NOT_AVAILABLE),
            teacher_email: or_default(self.teacher_email, NOT_AVAILABLE),
            teacher_phone: or_default(self.teacher_phone, NOT_AVAILABLE),
            teacher_room_location: or_default(self.teacher_room_location, NOT_AVAILABLE),
            teacher_image_url: or_default(self.teacher_image_url, ""),
        })
    }
}

fn or_default(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => placeholder.to_string(),
    }
}

/// Parses an English weekday name, either in full or as a three-letter abbreviation, ignoring
/// case.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let name = name.trim().to_ascii_uppercase();
    let day = match name.as_str() {
        "SATURDAY" | "SAT" => Weekday::Saturday,
        "SUNDAY" | "SUN" => Weekday::Sunday,
        "MONDAY" | "MON" => Weekday::Monday,
        "TUESDAY" | "TUE" => Weekday::Tuesday,
        "WEDNESDAY" | "WED" => Weekday::Wednesday,
        "THURSDAY" | "THU" => Weekday::Thursday,
        "FRIDAY" | "FRI" => Weekday::Friday,
        _ => return None,
    };
    Some(day)
}

/// Upper-case English name of a weekday, the spelling used by routine records.
pub fn weekday_str(day: Weekday) -> &'static str {
    match day {
        Weekday::Saturday => "SATURDAY",
        Weekday::Sunday => "SUNDAY",
        Weekday::Monday => "MONDAY",
        Weekday::Tuesday => "TUESDAY",
        Weekday::Wednesday => "WEDNESDAY",
        Weekday::Thursday => "THURSDAY",
        Weekday::Friday => "FRIDAY",
    }
}

pub(crate) mod weekday_name {
    use jiff::civil::Weekday;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_str(*day))
    }
}
