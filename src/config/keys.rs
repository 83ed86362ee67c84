// src/config/keys.rs

//! Recognised configuration keys for the project and task levels.

use serde_json::{Map, Value};

use crate::errors::{Result, RsyncGenError};

pub const RSYNC: &str = "rsync";
pub const DIRECTION: &str = "direction";
pub const SOURCE_ROOT: &str = "source_root";
pub const DEST_ROOT: &str = "dest_root";
pub const SSH_PORT: &str = "ssh_port";
pub const SSH_KEY_FILE: &str = "ssh_key_file";
pub const LOG_DIR_NAME: &str = "log_dir_name";
pub const MAX_LOG_FILES: &str = "max_log_files";
pub const GENERATED_CRONTAB_COMMENT_MARK: &str = "generated_crontab_comment_mark";
pub const GLOBAL_EXCLUDE: &str = "global_exclude";
pub const GLOBAL_ARGS: &str = "global_args";
pub const TASKS: &str = "tasks";

pub const NAME: &str = "name";
pub const SOURCE_PATH: &str = "source_path";
pub const DEST_PATH: &str = "dest_path";
pub const EXCLUDE: &str = "exclude";
pub const ARGS: &str = "args";
pub const SCHEDULE: &str = "schedule";

/// A set of recognised keys plus the subset that must be present.
#[derive(Debug, Clone, Copy)]
pub struct KeySchema {
    /// Used in error messages ("project config", "task").
    pub scope: &'static str,
    pub known: &'static [&'static str],
    pub required: &'static [&'static str],
}

pub const PROJECT_SCHEMA: KeySchema = KeySchema {
    scope: "project config",
    known: &[
        RSYNC,
        DIRECTION,
        SOURCE_ROOT,
        DEST_ROOT,
        SSH_PORT,
        SSH_KEY_FILE,
        LOG_DIR_NAME,
        MAX_LOG_FILES,
        GENERATED_CRONTAB_COMMENT_MARK,
        GLOBAL_EXCLUDE,
        GLOBAL_ARGS,
        TASKS,
    ],
    required: &[
        DIRECTION,
        SOURCE_ROOT,
        DEST_ROOT,
        GENERATED_CRONTAB_COMMENT_MARK,
        TASKS,
    ],
};

pub const TASK_SCHEMA: KeySchema = KeySchema {
    scope: "task",
    known: &[NAME, SOURCE_PATH, DEST_PATH, EXCLUDE, ARGS, SCHEDULE],
    required: &[NAME, SOURCE_PATH, DEST_PATH],
};

impl KeySchema {
    pub fn is_known(&self, key: &str) -> bool {
        self.known.contains(&key)
    }

    /// Reject unknown keys first, then missing required keys.
    ///
    /// Stops at the first violation.
    pub fn check(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(key) = map.keys().find(|k| !self.is_known(k)) {
            return Err(RsyncGenError::UnknownKey {
                scope: self.scope,
                key: key.clone(),
            });
        }

        if let Some(key) = self.required.iter().find(|k| !map.contains_key(**k)) {
            return Err(RsyncGenError::MissingKey {
                scope: self.scope,
                key: key.to_string(),
            });
        }

        Ok(())
    }

    /// Like [`KeySchema::check`], but first requires `value` to be an object.
    pub fn check_value<'a>(&self, value: &'a Value) -> Result<&'a Map<String, Value>> {
        let map = value.as_object().ok_or_else(|| {
            RsyncGenError::ConfigError(format!("{} must be a JSON object", self.scope))
        })?;
        self.check(map)?;
        Ok(map)
    }
}
