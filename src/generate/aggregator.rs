// src/generate/aggregator.rs

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::generate::shell_word;
use crate::project::Task;

pub const RUN_ALL_FILE_NAME: &str = "run_all.sh";

/// Collects one `bash <script>` line per task, in the order added.
#[derive(Debug, Clone)]
pub struct RunAllScript {
    path: PathBuf,
    lines: Vec<String>,
}

impl RunAllScript {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            path: output_dir.join(RUN_ALL_FILE_NAME),
            lines: Vec::new(),
        }
    }

    pub fn add_script(&mut self, task: &Task) {
        self.lines
            .push(format!("bash {}", shell_word(task.script_path())));
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines joined by `\n`, with a trailing newline.
    pub fn contents(&self) -> String {
        let mut contents = self.lines.join("\n");
        contents.push('\n');
        contents
    }

    pub fn write_to_file(&self, fs: &dyn FileSystem) -> Result<()> {
        fs.write(&self.path, self.contents().as_bytes())?;
        info!(path = ?self.path, scripts = self.lines.len(), "wrote run-all script");
        Ok(())
    }
}
