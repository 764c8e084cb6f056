// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use routine_core::{APP_NAME, Config as CoreConfig, config_dir};

const ROUTINE_CONFIG_ENV: &str = "ROUTINE_CONFIG";
const ROUTINE_DEV_ENV: &str = "ROUTINE_DEV";

const ROUTINE_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const ROUTINE_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Finds and reads the configuration: `--config`, then `ROUTINE_CONFIG`, then the user config
/// directory.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(ROUTINE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({ROUTINE_DEV_ENV} is set): config must be explicitly specified via --config or {ROUTINE_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading configuration");
    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(ROUTINE_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if ROUTINE_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if ROUTINE_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            ROUTINE_DEV_ENV,
            val,
            ROUTINE_DEV_VALID_TRUE.join(", "),
            ROUTINE_DEV_VALID_FALSE.join(", ")
        );
        None
    }
}
