// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Failures at the storage and configuration boundary. The engines themselves never fail.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RoutineError {
    /// The routine file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The routine file is not a JSON array of session records.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),
}
