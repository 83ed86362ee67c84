// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod generate;
pub mod logging;
pub mod project;
pub mod slug;
pub mod template;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, GeneratorPaths};
use crate::errors::Result;
use crate::fs::{reset_dir, FileSystem, RealFileSystem};
use crate::generate::{install_crontab, CrontabGenerator, RunAllScript};
use crate::project::Project;
use crate::template::ScriptTemplate;

/// What a generation run wrote.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    /// Per-task scripts, in declaration order.
    pub scripts: Vec<PathBuf>,
    pub run_all: PathBuf,
    pub crontab: PathBuf,
    pub crontab_mark: String,
    pub crontab_block: String,
    pub scheduled: usize,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - path resolution from CLI flags
/// - config loading + validation
/// - generation (or a dry-run plan)
/// - optional crontab installation
pub fn run(args: CliArgs) -> Result<()> {
    let paths = GeneratorPaths::from_args(&args);
    let fs = RealFileSystem;

    if args.dry_run {
        let project = dry_run(&fs, &paths)?;
        print_dry_run(&project, &paths, &std::path::absolute(&paths.output_dir)?);
        return Ok(());
    }

    let report = generate(&fs, &paths)?;

    if args.install_crontab {
        install_crontab(&report.crontab_mark, &report.crontab_block)?;
    }

    println!(
        "generated {} script(s), {} scheduled, in {}",
        report.scripts.len(),
        report.scheduled,
        report.output_dir.display()
    );
    Ok(())
}

/// Everything [`generate`] checks, without writing.
///
/// Each task is rendered into memory so template errors surface here too.
pub fn dry_run(fs: &dyn FileSystem, paths: &GeneratorPaths) -> Result<Project> {
    let output_dir = std::path::absolute(&paths.output_dir)?;

    let project = load_and_validate(fs, &paths.config_file, &output_dir)?;
    let template = ScriptTemplate::load(fs, &paths.template_file)?;

    for task in project.tasks() {
        template.render(&task.template_values())?;
        debug!(task = %task.name, "template renders");
    }
    Ok(project)
}

/// Run the whole pipeline against `fs`.
///
/// The config and template are read and validated before the output
/// directory is touched, so a bad config leaves previous output in place.
pub fn generate(fs: &dyn FileSystem, paths: &GeneratorPaths) -> Result<GenerationReport> {
    let output_dir = std::path::absolute(&paths.output_dir)?;

    let project = load_and_validate(fs, &paths.config_file, &output_dir)?;
    let template = ScriptTemplate::load(fs, &paths.template_file)?;

    reset_dir(fs, &output_dir)?;
    info!(output_dir = ?output_dir, "output directory reset");

    let mut run_all = RunAllScript::new(&output_dir);
    let mut crontab = CrontabGenerator::new(&project.settings().crontab_comment_mark, &output_dir);
    let mut scripts = Vec::with_capacity(project.tasks().len());

    for task in project.tasks() {
        task.render(fs, &template)?;
        run_all.add_script(task);
        crontab.add_script(task);
        scripts.push(task.script_path().to_path_buf());
    }

    run_all.write_to_file(fs)?;
    crontab.write_to_file(fs)?;

    Ok(GenerationReport {
        output_dir,
        scripts,
        run_all: run_all.path().to_path_buf(),
        crontab: crontab.path().to_path_buf(),
        crontab_mark: crontab.mark().to_string(),
        crontab_block: crontab.block(),
        scheduled: crontab.entries().len(),
    })
}

/// Simple dry-run output: print settings, tasks and derived values.
fn print_dry_run(project: &Project, paths: &GeneratorPaths, output_dir: &Path) {
    let settings = project.settings();
    println!("rsyncgen dry-run");
    println!("  config   = {}", paths.config_file.display());
    println!("  template = {}", paths.template_file.display());
    println!("  output   = {}", output_dir.display());
    println!("  direction = {}", settings.direction);
    println!("  logging = {}", project.is_logging_enabled());
    println!("  ssh = {}", project.is_ssh_enabled());
    println!("  max_log_files = {}", settings.max_log_files);
    println!();

    let mut crontab = CrontabGenerator::new(&settings.crontab_comment_mark, output_dir);

    println!("tasks ({}):", project.tasks().len());
    for task in project.tasks() {
        println!("  - {}", task.name);
        println!("      script: {}", task.script_path().display());
        println!("      source: {}", task.source());
        println!("      dest: {}", task.dest());
        let log_dir = task.log_dir();
        if !log_dir.is_empty() {
            println!("      log_dir: {log_dir}");
        }
        let args = task.rsync_args();
        if !args.is_empty() {
            println!("      args:");
            for arg in &args {
                println!("        {arg}");
            }
        }
        if let Some(schedule) = task.schedule() {
            println!("      schedule: {schedule}");
        }
        crontab.add_script(task);
    }

    println!();
    print!("{}", crontab.block());

    debug!("dry-run complete (nothing written)");
}
