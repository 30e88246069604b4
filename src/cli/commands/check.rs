//! Check command implementation.
//!
//! The `envsync check` command scans and exits non-zero when any
//! conflict is found, for use as a CI gate. No report file is written.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::EnvsyncConfig;
use crate::error::Result;
use crate::report::{scan, to_json_string};
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config: EnvsyncConfig,
    args: CheckArgs,
    runner: Box<dyn CommandRunner>,
}

impl CheckCommand {
    /// Create a new check command probing through the system shell.
    pub fn new(project_root: &Path, config: EnvsyncConfig, args: CheckArgs) -> Self {
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
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = scan(&self.project_root, &self.config, self.runner.as_ref())?;

        if self.args.json {
            ui.message(&to_json_string(&report.conflicts)?);
        } else {
            display::show_conflicts(ui, &report.conflicts);
        }

        if report.has_conflicts() {
            tracing::debug!("{} conflict(s) found", report.conflicts.total());
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
