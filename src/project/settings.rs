// src/project/settings.rs

use std::path::PathBuf;

use crate::types::Direction;

/// Project-wide settings shared read-only by every task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    pub direction: Direction,
    pub source_root: String,
    pub dest_root: String,
    /// `Some` iff `ssh_port` was present in the config.
    pub ssh_port: Option<u16>,
    pub ssh_key_file: Option<String>,
    pub rsync_bin: String,
    /// `Some` iff `log_dir_name` was present, even if it was empty or null.
    pub log_dir_name: Option<String>,
    pub max_log_files: u32,
    pub global_excludes: Vec<String>,
    pub global_args: Vec<String>,
    pub crontab_comment_mark: String,
    /// Absolute directory the per-task scripts are written to.
    pub script_dir: PathBuf,
}

impl ProjectSettings {
    pub fn is_logging_enabled(&self) -> bool {
        self.log_dir_name.is_some()
    }

    pub fn is_ssh_enabled(&self) -> bool {
        self.ssh_port.is_some()
    }

    /// `-e "ssh -p <port>"`, plus `-i <key>` when a key file is configured.
    pub fn ssh_arg(&self) -> Option<String> {
        let port = self.ssh_port?;
        Some(match &self.ssh_key_file {
            Some(key) => format!("-e \"ssh -p {port} -i {key}\""),
            None => format!("-e \"ssh -p {port}\""),
        })
    }

    /// Exclude pattern that keeps a task from copying its own logs.
    pub fn log_exclude_pattern(&self) -> Option<String> {
        self.log_dir_name.as_ref().map(|name| format!("{name}/"))
    }
}
