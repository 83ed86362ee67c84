#![allow(dead_code)]

use std::path::Path;

use rsyncgen::errors::Result;
use rsyncgen::project::Project;
use serde_json::Value;

pub use rsyncgen_test_utils::builders::{ProjectConfigBuilder, TaskConfigBuilder};
pub use rsyncgen_test_utils::init_tracing;

pub const SCRIPT_DIR: &str = "/out";

/// Build a project whose scripts live under `/out`.
pub fn project(config: &Value) -> Result<Project> {
    Project::from_value(config, Path::new(SCRIPT_DIR))
}

/// A one-task project with the builder defaults.
pub fn single_task(task: TaskConfigBuilder) -> Value {
    ProjectConfigBuilder::new().with_task(task.build()).build()
}
