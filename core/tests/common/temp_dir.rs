// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary routine files for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio::fs;

/// A temporary directory holding a routine file, removed when dropped.
#[derive(Debug)]
pub struct TempRoutine {
    pub dir: TempDir,
    pub routine_path: PathBuf,
}

impl TempRoutine {
    /// Writes `content` as `routine.json` in a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be created.
    pub async fn new(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let routine_path = dir.path().join("routine.json");
        fs::write(&routine_path, content).await?;
        Ok(Self { dir, routine_path })
    }
}

/// Sets up a temporary routine file.
///
/// This is a convenience wrapper around [`TempRoutine::new`].
///
/// # Errors
///
/// Returns an error if file creation fails.
pub async fn setup_temp_routine(content: &str) -> Result<TempRoutine, Box<dyn std::error::Error>> {
    TempRoutine::new(content).await
}
