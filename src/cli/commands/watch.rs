//! Watch command implementation.
//!
//! The `envsync watch` command rescans on an interval. Each completed scan
//! is published to a [`CurrentReport`] and then written to the report file.
//! A scan that fails (e.g. a manifest saved half-way) is reported and the
//! previous report stays current. A report file that cannot be written is
//! reported the same way, but the new report is still published.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use chrono::Local;

use crate::cli::args::WatchArgs;
use crate::config::EnvsyncConfig;
use crate::error::Result;
use crate::report::{scan, write_report, CurrentReport};
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The watch command implementation.
pub struct WatchCommand {
    project_root: PathBuf,
    config: EnvsyncConfig,
    args: WatchArgs,
    runner: Box<dyn CommandRunner>,
    current: CurrentReport,
}

impl WatchCommand {
    /// Create a new watch command probing through the system shell.
    pub fn new(project_root: &Path, config: EnvsyncConfig, args: WatchArgs) -> Self {
        let runner = ShellRunner::new().with_timeout(config.probes.timeout());
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
            runner: Box::new(runner),
            current: CurrentReport::new(),
        }
    }

    /// Replace the probe runner.
    pub fn with_runner(mut self, runner: impl CommandRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    /// Handle to the latest completed report.
    pub fn current(&self) -> CurrentReport {
        self.current.clone()
    }

    /// Seconds between scans.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.args.interval.unwrap_or(self.config.watch.interval))
    }

    fn report_path(&self) -> PathBuf {
        self.project_root.join(&self.config.report.path)
    }

    /// Run one scan and publish it. Returns whether the scan completed.
    fn scan_once(&self, ui: &mut dyn UserInterface, iteration: u64) -> Result<bool> {
        let stamp = Local::now().format("%H:%M:%S");

        let report = match scan(&self.project_root, &self.config, self.runner.as_ref()) {
            Ok(report) => report,
            Err(e) => {
                tracing::debug!("Scan #{} failed: {:?}", iteration, e);
                ui.error(&format!("[{}] Scan #{} failed: {}", stamp, iteration, e));
                return Ok(false);
            }
        };

        let changed = self
            .current
            .latest()
            .map_or(true, |previous| previous.conflicts != report.conflicts);

        let report = self.current.publish(report);

        ui.message(&format!(
            "[{}] Scan #{}: {} finding(s)",
            stamp,
            iteration,
            report.conflicts.total()
        ));
        if changed {
            display::show_conflicts(ui, &report.conflicts);
        }

        let path = self.report_path();
        if let Err(e) = write_report(&report, &path) {
            tracing::debug!("Writing {} failed: {:?}", path.display(), e);
            ui.error(&format!(
                "[{}] Scan #{}: could not write {}: {}",
                stamp,
                iteration,
                path.display(),
                e
            ));
            return Ok(false);
        }

        Ok(true)
    }
}

impl Command for WatchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let interval = self.interval();
        ui.show_header(&format!(
            "Watching {} every {}s",
            self.project_root.display(),
            interval.as_secs()
        ));

        let mut iteration = 0;
        let last_ok = loop {
            iteration += 1;
            let ok = self.scan_once(ui, iteration)?;

            if self.args.count.is_some_and(|count| iteration >= count) {
                break ok;
            }
            thread::sleep(interval);
        };

        if last_ok {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
