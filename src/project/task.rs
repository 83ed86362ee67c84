// src/project/task.rs

//! A single sync task and everything derived from it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde_json::Value;
use tracing::{debug, info};

use crate::config::model::RawTaskConfig;
use crate::config::validate::parse_task;
use crate::errors::{Result, RsyncGenError};
use crate::fs::FileSystem;
use crate::project::settings::ProjectSettings;
use crate::slug::slugify;
use crate::template::{placeholder, ScriptTemplate};
use crate::types::Direction;

const SCRIPT_PREFIX: &str = "rsync_";
const SCRIPT_EXTENSION: &str = ".sh";

/// One entry of `tasks`, bound to the settings of the project that owns it.
#[derive(Debug)]
pub struct Task {
    pub name: String,
    pub source_path: String,
    pub dest_path: String,
    pub exclude: Vec<String>,
    pub args: Vec<String>,
    pub schedule: Option<String>,

    project: Arc<ProjectSettings>,
    script_path: OnceLock<PathBuf>,
    local_path: OnceLock<String>,
}

impl Task {
    /// Key-check and build a task from its raw config value.
    pub fn new(project: Arc<ProjectSettings>, value: &Value) -> Result<Self> {
        let raw = parse_task(value)?;
        Self::from_raw(project, raw)
    }

    pub fn from_raw(project: Arc<ProjectSettings>, raw: RawTaskConfig) -> Result<Self> {
        if slugify(&raw.name).is_empty() {
            return Err(RsyncGenError::ConfigError(format!(
                "task name '{}' contains no usable characters for a script name",
                raw.name
            )));
        }

        Ok(Self {
            name: raw.name,
            source_path: raw.source_path,
            dest_path: raw.dest_path,
            exclude: raw.exclude,
            args: raw.args,
            schedule: raw.schedule,
            project,
            script_path: OnceLock::new(),
            local_path: OnceLock::new(),
        })
    }

    pub fn project(&self) -> &ProjectSettings {
        &self.project
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// File name of the generated script, e.g. `rsync_photos.sh`.
    pub fn script_file_name(&self) -> String {
        format!("{SCRIPT_PREFIX}{}{SCRIPT_EXTENSION}", self.slug())
    }

    /// Absolute path of the generated script. Computed once.
    pub fn script_path(&self) -> &Path {
        self.script_path
            .get_or_init(|| self.project.script_dir.join(self.script_file_name()))
    }

    /// Full rsync source: `source_root + source_path`, concatenated verbatim.
    pub fn source(&self) -> String {
        format!("{}{}", self.project.source_root, self.source_path)
    }

    /// Full rsync destination: `dest_root + dest_path`, concatenated verbatim.
    pub fn dest(&self) -> String {
        format!("{}{}", self.project.dest_root, self.dest_path)
    }

    /// The side of the transfer on this machine. Computed once.
    pub fn local_path(&self) -> &str {
        self.local_path.get_or_init(|| match self.project.direction {
            Direction::Push => self.source(),
            Direction::Pull => self.dest(),
        })
    }

    /// Directory the generated script writes its logs to, with a trailing
    /// `/`, or an empty string when logging is disabled.
    pub fn log_dir(&self) -> String {
        let Some(name) = self.project.log_dir_name.as_deref() else {
            return String::new();
        };
        let mut dir = join_path(self.local_path(), name);
        if !dir.ends_with('/') {
            dir.push('/');
        }
        dir
    }

    /// Schedule expression, if this task takes part in the crontab block.
    pub fn schedule(&self) -> Option<&str> {
        self.schedule
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Exclude patterns in order: log dir, global, task.
    ///
    /// The log dir pattern appears exactly once even if it is also listed
    /// explicitly.
    pub fn exclude_patterns(&self) -> Vec<String> {
        let log_pattern = self.project.log_exclude_pattern();
        let mut patterns: Vec<String> = log_pattern.iter().cloned().collect();
        patterns.extend(
            self.project
                .global_excludes
                .iter()
                .chain(self.exclude.iter())
                .filter(|p| log_pattern.as_deref() != Some(p.as_str()))
                .cloned(),
        );
        patterns
    }

    pub fn exclude_args(&self) -> Vec<String> {
        self.exclude_patterns()
            .iter()
            .map(|pattern| format!("--exclude \"{pattern}\""))
            .collect()
    }

    /// All rsync arguments in order: ssh, global args, task args, excludes.
    pub fn rsync_args(&self) -> Vec<String> {
        let mut args: Vec<String> = self.project.ssh_arg().into_iter().collect();
        args.extend(self.project.global_args.iter().cloned());
        args.extend(self.args.iter().cloned());
        args.extend(self.exclude_args());
        args
    }

    /// One argument per line, each ending in a shell line continuation.
    ///
    /// With no arguments a single blank continuation line is emitted so the
    /// template's `\`-chain stays well formed.
    pub fn multiline_args(&self) -> String {
        let mut args = self.rsync_args();
        if args.is_empty() {
            args.push(String::new());
        }
        args.iter()
            .map(|arg| format!("    {arg} \\"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Values for every placeholder in the script template.
    pub fn template_values(&self) -> BTreeMap<&'static str, String> {
        let logging = self.project.is_logging_enabled();
        BTreeMap::from([
            (placeholder::RSYNC_BIN, self.project.rsync_bin.clone()),
            (placeholder::RSYNC_SOURCE, self.source()),
            (placeholder::RSYNC_DEST, self.dest()),
            (placeholder::MULTILINE_ARGS, self.multiline_args()),
            (placeholder::ENABLE_LOGGING, logging.to_string()),
            (placeholder::LOG_DIR, self.log_dir()),
            (placeholder::MAX_LOG_FILES, self.project.max_log_files.to_string()),
        ])
    }

    /// Render the template and write the script to [`Task::script_path`].
    pub fn render(&self, fs: &dyn FileSystem, template: &ScriptTemplate) -> Result<()> {
        let content = template.render(&self.template_values())?;
        let path = self.script_path();
        fs.write(path, content.as_bytes())?;
        info!(task = %self.name, script = ?path, "wrote rsync script");
        debug!(task = %self.name, args = ?self.rsync_args(), "rsync arguments");
        Ok(())
    }
}

/// POSIX-style join: an absolute `name` replaces `base`, otherwise a `/` is
/// inserted unless `base` is empty or already ends with one.
fn join_path(base: &str, name: &str) -> String {
    if name.starts_with('/') || base.is_empty() {
        name.to_string()
    } else if base.ends_with('/') {
        format!("{base}{name}")
    } else {
        format!("{base}/{name}")
    }
}
