// src/config/loader.rs

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::project::Project;

/// Load a configuration file and return it as a raw JSON value.
///
/// Files ending in `.toml` are parsed as TOML and converted into the same
/// value model; everything else is parsed as JSON. This performs no
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let value = if is_toml {
        let table: toml::Table = toml::from_str(&contents)?;
        serde_json::to_value(table)?
    } else {
        serde_json::from_str(&contents)?
    };

    debug!(config_path = ?path, toml = is_toml, "config parsed");
    Ok(value)
}

/// Load a configuration file and build a validated [`Project`] from it.
///
/// `script_dir` is the directory the per-task scripts will be written to;
/// it is baked into each task's script path.
pub fn load_and_validate(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    script_dir: impl AsRef<Path>,
) -> Result<Project> {
    let path = path.as_ref();
    info!(config_path = ?path, "loading project config");
    let raw = load_from_path(fs, path)?;
    Project::from_value(&raw, script_dir.as_ref())
}
