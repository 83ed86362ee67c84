// src/config/model.rs

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Project-level configuration as read from the config file.
///
/// ```json
/// {
///   "direction": "push",
///   "source_root": "/home/me/",
///   "dest_root": "me@backup:/srv/me/",
///   "ssh_port": 2222,
///   "log_dir_name": "__rsync_logs__",
///   "global_exclude": [".DS_Store"],
///   "global_args": ["-av"],
///   "generated_crontab_comment_mark": "rsyncgen",
///   "tasks": [{ "name": "Photos", "source_path": "photos/", "dest_path": "photos/" }]
/// }
/// ```
///
/// Keys are checked against [`crate::config::keys::PROJECT_SCHEMA`] before
/// this struct is deserialized, so serde only reports type mismatches here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProjectConfig {
    pub direction: String,
    pub source_root: String,
    pub dest_root: String,

    /// Outer `Some` means the key was present, even with a `null` value.
    #[serde(default, deserialize_with = "present")]
    pub ssh_port: Option<Option<i64>>,

    #[serde(default)]
    pub ssh_key_file: Option<String>,

    /// rsync executable used by the generated scripts.
    #[serde(default)]
    pub rsync: Option<String>,

    /// Outer `Some` means the key was present; that alone enables logging.
    #[serde(default, deserialize_with = "present")]
    pub log_dir_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub max_log_files: Option<Option<i64>>,

    #[serde(default)]
    pub global_exclude: Vec<String>,

    #[serde(default)]
    pub global_args: Vec<String>,

    pub generated_crontab_comment_mark: String,

    /// Kept as raw values so each task can be key-checked on its own.
    pub tasks: Vec<Value>,
}

/// A single entry of `tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTaskConfig {
    pub name: String,
    pub source_path: String,
    pub dest_path: String,

    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub args: Vec<String>,

    /// Five-field cron expression or an `@daily`-style macro.
    #[serde(default)]
    pub schedule: Option<String>,
}

/// Distinguish "key absent" (`None`, via `#[serde(default)]`) from
/// "key present with null" (`Some(None)`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
