//! Scan command implementation.
//!
//! The `envsync scan` command inventories the environment, reconciles it
//! with the project's manifests, and writes the JSON report.

use std::path::{Path, PathBuf};

use crate::cli::args::ScanArgs;
use crate::config::EnvsyncConfig;
use crate::error::Result;
use crate::report::{scan, to_json_string, write_report};
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The scan command implementation.
pub struct ScanCommand {
    project_root: PathBuf,
    config: EnvsyncConfig,
    args: ScanArgs,
    runner: Box<dyn CommandRunner>,
}

impl ScanCommand {
    /// Create a new scan command probing through the system shell.
    pub fn new(project_root: &Path, config: EnvsyncConfig, args: ScanArgs) -> Self {
        let runner = ShellRunner::new().with_timeout(config.probes.timeout());
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
            runner: Box::new(runner),
        }
    }

    /// Replace the probe runner.
    pub fn with_runner(mut self, runner: impl CommandRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    /// Where the report file goes, or `None` with `--no-write`.
    ///
    /// `--output` is taken as given; the configured path is relative to
    /// the project root.
    pub fn report_path(&self) -> Option<PathBuf> {
        if self.args.no_write {
            return None;
        }
        Some(match &self.args.output {
            Some(path) => path.clone(),
            None => self.project_root.join(&self.config.report.path),
        })
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = scan(&self.project_root, &self.config, self.runner.as_ref())?;

        if self.args.json {
            ui.message(&to_json_string(&report)?);
        } else {
            display::show_environment(ui, &report);
            display::show_conflicts(ui, &report.conflicts);
        }

        if let Some(path) = self.report_path() {
            write_report(&report, &path)?;
            if !self.args.json {
                ui.success(&format!("Report written to {}", path.display()));
            }
        }

        Ok(CommandResult::success())
    }
}
