// src/config/mod.rs

//! Configuration loading and validation for rsyncgen.
//!
//! Responsibilities:
//! - Enumerate the recognised project and task keys (`keys.rs`).
//! - Define the serde-backed raw data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate values and turn them into project settings (`validate.rs`).
//! - Resolve where config, template and output live (`paths.rs`).

pub mod keys;
pub mod loader;
pub mod model;
pub mod paths;
pub mod validate;

pub use keys::{KeySchema, PROJECT_SCHEMA, TASK_SCHEMA};
pub use loader::{load_and_validate, load_from_path};
pub use model::{RawProjectConfig, RawTaskConfig};
pub use paths::GeneratorPaths;
pub use validate::{DEFAULT_MAX_LOG_FILES, DEFAULT_RSYNC_BIN};
