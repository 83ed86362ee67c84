// src/config/validate.rs

use std::path::PathBuf;

use serde_json::Value;

use crate::config::keys::{PROJECT_SCHEMA, TASK_SCHEMA};
use crate::config::model::{RawProjectConfig, RawTaskConfig};
use crate::errors::{Result, RsyncGenError};
use crate::project::ProjectSettings;
use crate::types::Direction;

pub const DEFAULT_MAX_LOG_FILES: u32 = 10;
pub const DEFAULT_RSYNC_BIN: &str = "rsync";

const CRON_MACROS: &[&str] = &[
    "@reboot",
    "@yearly",
    "@annually",
    "@monthly",
    "@weekly",
    "@daily",
    "@midnight",
    "@hourly",
];

/// Check the project keys and deserialize the typed raw config.
pub fn parse_project(value: &Value) -> Result<RawProjectConfig> {
    let map = PROJECT_SCHEMA.check_value(value)?;
    let raw: RawProjectConfig = serde_json::from_value(Value::Object(map.clone()))?;
    Ok(raw)
}

/// Check the task keys and deserialize the typed raw task.
pub fn parse_task(value: &Value) -> Result<RawTaskConfig> {
    let map = TASK_SCHEMA.check_value(value)?;
    let raw: RawTaskConfig = serde_json::from_value(Value::Object(map.clone()))?;
    validate_schedule(&raw)?;
    Ok(raw)
}

impl RawProjectConfig {
    /// Validate project-wide values and split off the raw task list.
    ///
    /// Checks run in a fixed order (direction, ssh port, log count, task
    /// list) and stop at the first failure.
    pub fn into_settings(self, script_dir: PathBuf) -> Result<(ProjectSettings, Vec<Value>)> {
        let direction: Direction = self.direction.parse().map_err(RsyncGenError::ConfigError)?;

        let ssh_port = match self.ssh_port {
            None => None,
            Some(Some(port)) if (1..=65535).contains(&port) => Some(port as u16),
            Some(Some(port)) => {
                return Err(RsyncGenError::ConfigError(format!(
                    "Invalid SSH port: {port}"
                )));
            }
            Some(None) => {
                return Err(RsyncGenError::ConfigError(
                    "Invalid SSH port: null".to_string(),
                ));
            }
        };

        let max_log_files = match self.max_log_files {
            None => DEFAULT_MAX_LOG_FILES,
            Some(Some(n)) if n > 0 => u32::try_from(n).map_err(|_| {
                RsyncGenError::ConfigError(format!("`max_log_files` is too large: {n}"))
            })?,
            Some(n) => {
                let shown = n.map_or_else(|| "null".to_string(), |n| n.to_string());
                return Err(RsyncGenError::ConfigError(format!(
                    "`max_log_files` must be greater than 0; however, now it is {shown}."
                )));
            }
        };

        if self.tasks.is_empty() {
            return Err(RsyncGenError::ConfigError(
                "No task defined in the project.".to_string(),
            ));
        }

        if self.ssh_key_file.is_some() && ssh_port.is_none() {
            return Err(RsyncGenError::ConfigError(
                "`ssh_key_file` requires `ssh_port` to be set".to_string(),
            ));
        }

        let settings = ProjectSettings {
            direction,
            source_root: self.source_root,
            dest_root: self.dest_root,
            ssh_port,
            ssh_key_file: self.ssh_key_file,
            rsync_bin: self.rsync.unwrap_or_else(|| DEFAULT_RSYNC_BIN.to_string()),
            // A present-but-null name still turns logging on.
            log_dir_name: self.log_dir_name.map(Option::unwrap_or_default),
            max_log_files,
            global_excludes: self.global_exclude,
            global_args: self.global_args,
            crontab_comment_mark: self.generated_crontab_comment_mark,
            script_dir,
        };

        Ok((settings, self.tasks))
    }
}

fn validate_schedule(raw: &RawTaskConfig) -> Result<()> {
    let Some(schedule) = raw.schedule.as_deref().map(str::trim) else {
        return Ok(());
    };
    if schedule.is_empty() {
        return Ok(());
    }

    let valid = if schedule.starts_with('@') {
        CRON_MACROS.contains(&schedule)
    } else {
        schedule.split_whitespace().count() == 5
    };

    if !valid {
        return Err(RsyncGenError::ConfigError(format!(
            "task '{}' has invalid schedule '{}' (expected five cron fields or an @-macro)",
            raw.name, schedule
        )));
    }
    Ok(())
}
