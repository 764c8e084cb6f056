// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::alert::DEFAULT_LEAD_MINUTES;
use crate::error::RoutineError;
use crate::merge::GroupingPolicy;
use crate::search::SearchContext;

/// The name of the application, used for config and state directories.
pub const APP_NAME: &str = "routine";

/// Core configuration, the `[core]` table of the config file.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the routine file, a JSON array of session records.
    pub routine_path: PathBuf,

    /// Minutes before class that reminders fire.
    #[serde(default = "default_lead_minutes")]
    pub alert_lead_minutes: u32,

    /// Which saved search is used when none is given.
    #[serde(default)]
    pub policy: GroupingPolicy,

    /// Saved section search.
    #[serde(default)]
    pub section: Option<String>,

    /// Saved teacher search.
    #[serde(default)]
    pub teacher: Option<String>,
}

const fn default_lead_minutes() -> u32 {
    DEFAULT_LEAD_MINUTES
}

impl Config {
    pub fn new(routine_path: impl Into<PathBuf>) -> Self {
        Self {
            routine_path: routine_path.into(),
            alert_lead_minutes: DEFAULT_LEAD_MINUTES,
            policy: GroupingPolicy::default(),
            section: None,
            teacher: None,
        }
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), RoutineError> {
        self.routine_path = expand_path(&self.routine_path)?;
        Ok(())
    }

    /// The saved search, preferring the one that matches the configured policy.
    pub fn default_search(&self) -> Option<SearchContext> {
        self.saved_search(self.policy)
    }

    /// The saved search of kind `policy`, or the other one when that is not saved.
    pub fn saved_search(&self, policy: GroupingPolicy) -> Option<SearchContext> {
        let section = || self.section.clone().map(SearchContext::Section);
        let teacher = || self.teacher.clone().map(SearchContext::Teacher);
        match policy {
            GroupingPolicy::SectionOriented => section().or_else(teacher),
            GroupingPolicy::TeacherOriented => teacher().or_else(section),
        }
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, RoutineError> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| RoutineError::Config(format!("invalid path: {}", path.display())))?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(home_dir()?.join(stripped));
        }
    }

    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn home_dir() -> Result<PathBuf, RoutineError> {
    dirs::home_dir().ok_or_else(|| RoutineError::Config("home directory not found".into()))
}

/// User-specific configuration directory.
pub fn config_dir() -> Result<PathBuf, RoutineError> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| RoutineError::Config("config directory not found".into()))
}
