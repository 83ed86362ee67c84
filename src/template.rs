// src/template.rs

//! Placeholder substitution for the rsync script template.
//!
//! Syntax: `{name}` is replaced by the value for `name`; `{{` and `}}` are
//! literal braces (so shell `${var}` is written `${{var}}`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::{Result, RsyncGenError};
use crate::fs::FileSystem;

/// Placeholder names understood by the rsync script template.
pub mod placeholder {
    pub const RSYNC_BIN: &str = "rsync_bin";
    pub const RSYNC_SOURCE: &str = "rsync_source";
    pub const RSYNC_DEST: &str = "rsync_dest";
    pub const MULTILINE_ARGS: &str = "multiline_args";
    pub const ENABLE_LOGGING: &str = "enable_logging";
    pub const LOG_DIR: &str = "log_dir";
    pub const MAX_LOG_FILES: &str = "max_log_files";
}

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}|[{}]").expect("Invalid template regex")
});

/// A template loaded once and rendered for every task.
#[derive(Debug, Clone)]
pub struct ScriptTemplate {
    path: PathBuf,
    source: String,
}

impl ScriptTemplate {
    pub fn load(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs.read_to_string(path).map_err(|e| {
            RsyncGenError::TemplateError(format!("cannot read template {:?}: {e:#}", path))
        })?;
        debug!(template = ?path, bytes = source.len(), "template loaded");
        Ok(Self::from_source(path, source))
    }

    pub fn from_source(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Substitute every placeholder.
    ///
    /// An unknown placeholder or a lone brace is an error naming its byte
    /// offset in the template.
    pub fn render(&self, values: &BTreeMap<&'static str, String>) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        let mut last = 0;

        for caps in TOKEN.captures_iter(&self.source) {
            let whole = caps.get(0).expect("capture 0 always present");
            out.push_str(&self.source[last..whole.start()]);
            last = whole.end();

            match (whole.as_str(), caps.get(1)) {
                ("{{", _) => out.push('{'),
                ("}}", _) => out.push('}'),
                (_, Some(name)) => {
                    let value = values.get(name.as_str()).ok_or_else(|| {
                        RsyncGenError::TemplateError(format!(
                            "{:?}: unknown placeholder '{{{}}}' at byte {}",
                            self.path,
                            name.as_str(),
                            whole.start()
                        ))
                    })?;
                    out.push_str(value);
                }
                (brace, None) => {
                    return Err(RsyncGenError::TemplateError(format!(
                        "{:?}: unbalanced '{}' at byte {}",
                        self.path,
                        brace,
                        whole.start()
                    )));
                }
            }
        }

        out.push_str(&self.source[last..]);
        Ok(out)
    }
}
