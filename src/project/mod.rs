// src/project/mod.rs

//! The validated project: shared settings plus its tasks in declaration order.

pub mod settings;
pub mod task;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::config::validate::parse_project;
use crate::errors::{Result, RsyncGenError};

pub use settings::ProjectSettings;
pub use task::Task;

#[derive(Debug)]
pub struct Project {
    settings: Arc<ProjectSettings>,
    tasks: Vec<Task>,
}

impl Project {
    /// Validate a raw config value and build every task in order.
    ///
    /// Fails on the first violation; no partially built project is returned.
    pub fn from_value(value: &Value, script_dir: &Path) -> Result<Self> {
        let raw = parse_project(value)?;
        let (settings, raw_tasks) = raw.into_settings(script_dir.to_path_buf())?;
        let settings = Arc::new(settings);

        let tasks = raw_tasks
            .iter()
            .map(|raw| Task::new(Arc::clone(&settings), raw))
            .collect::<Result<Vec<_>>>()?;

        ensure_unique_scripts(&tasks)?;
        for task in &tasks {
            warn_on_bare_concatenation(task);
        }

        info!(
            direction = %settings.direction,
            tasks = tasks.len(),
            logging = settings.is_logging_enabled(),
            ssh = settings.is_ssh_enabled(),
            "project config validated"
        );

        Ok(Self { settings, tasks })
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.settings.is_logging_enabled()
    }

    pub fn is_ssh_enabled(&self) -> bool {
        self.settings.is_ssh_enabled()
    }
}

/// Two names that slugify alike would overwrite each other's script.
fn ensure_unique_scripts(tasks: &[Task]) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for task in tasks {
        if let Some(previous) = seen.insert(task.slug(), task.name.as_str()) {
            return Err(RsyncGenError::ConfigError(format!(
                "tasks '{}' and '{}' both generate {}",
                previous,
                task.name,
                task.script_file_name()
            )));
        }
    }
    Ok(())
}

fn warn_on_bare_concatenation(task: &Task) {
    let settings = task.project();
    let pairs = [
        ("source", settings.source_root.as_str(), task.source_path.as_str()),
        ("dest", settings.dest_root.as_str(), task.dest_path.as_str()),
    ];
    for (side, root, path) in pairs {
        let joined = root.is_empty()
            || path.is_empty()
            || root.ends_with(['/', ':'])
            || path.starts_with('/');
        if !joined {
            warn!(
                task = %task.name,
                root,
                path,
                "{side} root and path are concatenated without a '/' separator"
            );
        }
    }
}
