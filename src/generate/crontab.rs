// src/generate/crontab.rs

//! Crontab entries for scheduled tasks, wrapped in a marker-delimited block:
//!
//! ```text
//! # BEGIN <mark>
//! 0 3 * * * bash /abs/output/rsync_photos.sh
//! # END <mark>
//! ```
//!
//! [`merge_block`] swaps that block into an existing crontab without
//! touching any other line, so regenerating is idempotent.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use anyhow::Context;
use tracing::{debug, info};

use crate::errors::{Result, RsyncGenError};
use crate::fs::FileSystem;
use crate::generate::shell_word;
use crate::project::Task;

pub const CRONTAB_FILE_NAME: &str = "crontab";

pub fn begin_marker(mark: &str) -> String {
    format!("# BEGIN {mark}")
}

pub fn end_marker(mark: &str) -> String {
    format!("# END {mark}")
}

#[derive(Debug, Clone)]
pub struct CrontabGenerator {
    mark: String,
    path: PathBuf,
    entries: Vec<String>,
}

impl CrontabGenerator {
    pub fn new(comment_mark: impl Into<String>, output_dir: &Path) -> Self {
        Self {
            mark: comment_mark.into(),
            path: output_dir.join(CRONTAB_FILE_NAME),
            entries: Vec::new(),
        }
    }

    /// Add an entry for `task` if it has a schedule. Returns whether it did.
    pub fn add_script(&mut self, task: &Task) -> bool {
        let Some(schedule) = task.schedule() else {
            debug!(task = %task.name, "no schedule; skipping crontab entry");
            return false;
        };
        self.entries
            .push(format!("{schedule} bash {}", shell_word(task.script_path())));
        true
    }

    pub fn mark(&self) -> &str {
        &self.mark
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The full block, markers included, ending in a newline.
    pub fn block(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(begin_marker(&self.mark));
        lines.extend(self.entries.iter().cloned());
        lines.push(end_marker(&self.mark));
        let mut block = lines.join("\n");
        block.push('\n');
        block
    }

    pub fn merge_into(&self, existing: &str) -> Result<String> {
        merge_block(existing, &self.mark, &self.block())
    }

    pub fn write_to_file(&self, fs: &dyn FileSystem) -> Result<()> {
        fs.write(&self.path, self.block().as_bytes())?;
        info!(path = ?self.path, entries = self.entries.len(), "wrote crontab block");
        Ok(())
    }
}

/// Replace the block owned by `mark` in `existing` with `block`.
///
/// Lines outside the old block are kept in order; the new block goes at the
/// end. An opening marker without a matching closing marker is an error,
/// since everything after it would otherwise be dropped.
pub fn merge_block(existing: &str, mark: &str, block: &str) -> Result<String> {
    let begin = begin_marker(mark);
    let end = end_marker(mark);

    let mut kept: Vec<&str> = Vec::new();
    let mut inside = false;
    for line in existing.lines() {
        let trimmed = line.trim();
        if inside {
            if trimmed == end {
                inside = false;
            }
        } else if trimmed == begin {
            inside = true;
        } else {
            kept.push(line);
        }
    }

    if inside {
        return Err(RsyncGenError::ConfigError(format!(
            "crontab has '{begin}' without a matching '{end}'"
        )));
    }

    let mut merged = kept.join("\n");
    if !merged.is_empty() {
        merged.push('\n');
    }
    merged.push_str(block);
    Ok(merged)
}

/// The current crontab from a `crontab -l` run.
///
/// A failed listing counts as empty only when it reports that the user has
/// no crontab; any other failure is an error so nothing gets overwritten.
pub fn existing_crontab(listing: &Output) -> Result<String> {
    if listing.status.success() {
        return Ok(String::from_utf8_lossy(&listing.stdout).into_owned());
    }
    let stderr = String::from_utf8_lossy(&listing.stderr);
    if stderr.contains("no crontab for") {
        debug!(stderr = %stderr.trim(), "no existing crontab");
        return Ok(String::new());
    }
    Err(anyhow::anyhow!(
        "`crontab -l` exited with {}: {}",
        listing.status,
        stderr.trim()
    )
    .into())
}

/// Merge `block` into the invoking user's crontab via `crontab -l` and
/// `crontab -`.
pub fn install_crontab(mark: &str, block: &str) -> Result<()> {
    let listing = Command::new("crontab")
        .arg("-l")
        .output()
        .context("running `crontab -l`")?;

    let existing = existing_crontab(&listing)?;
    let merged = merge_block(&existing, mark, block)?;

    let mut child = Command::new("crontab")
        .arg("-")
        .stdin(Stdio::piped())
        .spawn()
        .context("spawning `crontab -`")?;
    child
        .stdin
        .take()
        .context("stdin of `crontab -`")?
        .write_all(merged.as_bytes())
        .context("writing crontab")?;
    let status = child.wait().context("waiting for `crontab -`")?;
    if !status.success() {
        return Err(anyhow::anyhow!("`crontab -` exited with {status}").into());
    }

    info!(mark, "installed crontab block");
    Ok(())
}
