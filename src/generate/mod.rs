// src/generate/mod.rs

//! Artifacts built from the whole task list: the run-all script and the
//! crontab block.

pub mod aggregator;
pub mod crontab;

pub use aggregator::RunAllScript;
pub use crontab::{existing_crontab, install_crontab, merge_block, CrontabGenerator};

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static SHELL_SAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_./:@%+=,-]+$").expect("Invalid shell-safe regex"));

/// `path` as a single shell word: unchanged when it needs no quoting,
/// otherwise single-quoted.
pub fn shell_word(path: &Path) -> String {
    let text = path.display().to_string();
    if SHELL_SAFE.is_match(&text) {
        text
    } else {
        format!("'{}'", text.replace('\'', r"'\''"))
    }
}
