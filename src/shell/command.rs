//! Shell command execution.

use crate::error::Result;
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::platform::{detect_shell, ShellType};

/// How often a child with a deadline is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed after exceeding its timeout.
    pub timed_out: bool,

    /// Shell the command ran under.
    pub shell: ShellType,
}

impl CommandResult {
    fn from_status(
        status: ExitStatus,
        stdout: String,
        stderr: String,
        duration: Duration,
        shell: ShellType,
    ) -> Self {
        Self {
            exit_code: status.code(),
            stdout,
            stderr,
            duration,
            success: status.success(),
            timed_out: false,
            shell,
        }
    }

    fn timed_out(duration: Duration, shell: ShellType) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            success: false,
            timed_out: true,
            shell,
        }
    }

    /// Trimmed stdout if non-empty, otherwise trimmed stderr.
    pub fn output_text(&self) -> &str {
        let stdout = self.stdout.trim();
        if stdout.is_empty() {
            self.stderr.trim()
        } else {
            stdout
        }
    }

    /// Whether the shell reported that the command could not be found.
    pub fn is_command_not_found(&self) -> bool {
        match (self.exit_code, self.shell.not_found_exit_code()) {
            (Some(code), Some(expected)) => code == expected,
            _ => false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Kill the command after this long (None = wait indefinitely).
    pub timeout: Option<Duration>,
}

/// Execute a shell command, capturing stdout and stderr.
///
/// Returns `Err` only when the shell itself cannot be spawned or waited on.
/// A command that runs and fails is reported through [`CommandResult`].
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let shell = detect_shell();

    let mut cmd = Command::new(&shell.executable);
    cmd.arg(shell.name.command_flag());
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn()?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Drain both pipes on their own threads so a chatty child cannot
    // block on a full pipe while we wait on it.
    let stdout_handle = thread::spawn(move || read_pipe(stdout));
    let stderr_handle = thread::spawn(move || read_pipe(stderr));

    let status = match options.timeout {
        Some(limit) => wait_with_deadline(&mut child, start, limit)?,
        None => Some(child.wait()?),
    };

    let Some(status) = status else {
        // Grandchildren may still hold the pipes open; leave the readers detached.
        tracing::debug!("Command timed out: {}", command);
        return Ok(CommandResult::timed_out(start.elapsed(), shell.name));
    };

    let stdout_output = stdout_handle.join().unwrap_or_default();
    let stderr_output = stderr_handle.join().unwrap_or_default();

    Ok(CommandResult::from_status(
        status,
        stdout_output,
        stderr_output,
        start.elapsed(),
        shell.name,
    ))
}

fn read_pipe<R: Read>(pipe: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Wait for the child until `limit` has elapsed since `start`.
///
/// Returns `None` after killing the child if the deadline passes.
fn wait_with_deadline(
    child: &mut Child,
    start: Instant,
    limit: Duration,
) -> Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() >= limit {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}
