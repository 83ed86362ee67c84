// src/config/paths.rs

use std::path::{Path, PathBuf};

use crate::cli::CliArgs;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const TEMPLATE_FILE: &str = "template/rsync.sh.template";
pub const OUTPUT_DIR_NAME: &str = "output";

/// Locations the generator reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPaths {
    pub config_file: PathBuf,
    pub template_file: PathBuf,
    pub output_dir: PathBuf,
}

impl GeneratorPaths {
    /// The conventional layout below an install root:
    /// `config.json`, `template/rsync.sh.template` and `output/`.
    pub fn under_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config_file: root.join(CONFIG_FILE_NAME),
            template_file: root.join(TEMPLATE_FILE),
            output_dir: root.join(OUTPUT_DIR_NAME),
        }
    }

    /// Root defaults with any per-path CLI overrides applied.
    pub fn from_args(args: &CliArgs) -> Self {
        let defaults = Self::under_root(&args.root);
        Self {
            config_file: args.config.clone().unwrap_or(defaults.config_file),
            template_file: args.template.clone().unwrap_or(defaults.template_file),
            output_dir: args.output.clone().unwrap_or(defaults.output_dir),
        }
    }
}

impl Default for GeneratorPaths {
    fn default() -> Self {
        Self::under_root(".")
    }
}
