// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use tokio::fs;

use crate::error::RoutineError;
use crate::session::{RawSession, ScheduleSession};

/// Reads a routine file, a JSON array of session records.
#[tracing::instrument]
pub async fn load_sessions(path: &Path) -> Result<Vec<ScheduleSession>, RoutineError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| RoutineError::Io {
            path: path.to_owned(),
            source,
        })?;

    parse_sessions(&content).map_err(|source| RoutineError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Parses and normalizes session records, dropping those that have no usable weekday.
pub fn parse_sessions(content: &str) -> Result<Vec<ScheduleSession>, serde_json::Error> {
    let raws: Vec<RawSession> = serde_json::from_str(content)?;
    let total = raws.len();

    let sessions: Vec<_> = raws.into_iter().filter_map(RawSession::normalize).collect();
    if sessions.len() < total {
        tracing::warn!(dropped = total - sessions.len(), total, "dropped unusable sessions");
    }

    tracing::debug!(count = sessions.len(), "loaded sessions");
    Ok(sessions)
}
