//! Tool probes that never fail.
//!
//! A missing Java, Node or npm on the host is an expected condition, not an
//! error. [`CommandRunner::run`] therefore returns a [`ProbeOutput`] rather
//! than a `Result`: either the captured text, or a typed
//! [`Unavailable`](ProbeOutput::Unavailable) value that renders as a
//! placeholder string such as `"java not found"`.
//!
//! # Example
//!
//! ```
//! use envsync::shell::{CommandRunner, ProbeOutput};
//!
//! // Any closure can stand in for the shell, which keeps tests deterministic.
//! let runner = |cmd: &str| ProbeOutput::not_found(cmd);
//! let output = runner.run("node -v");
//! assert_eq!(output.to_string(), "node not found");
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use super::command::{execute, CommandOptions, CommandResult};

/// Why a probe produced no usable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The shell could not find the tool.
    NotFound { tool: String },

    /// The tool did not finish before the probe timeout.
    TimedOut { secs: u64 },

    /// The tool exited unsuccessfully without printing anything.
    Failed { code: Option<i32> },

    /// The shell itself could not be started.
    SpawnError { message: String },

    /// The tool ran but printed something envsync could not interpret.
    Unrecognized,
}

/// Output of a single probe command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutput {
    /// Trimmed stdout, or trimmed stderr when stdout was empty.
    Captured(String),

    /// The tool could not produce output.
    Unavailable {
        command: String,
        reason: UnavailableReason,
    },
}

impl ProbeOutput {
    /// Placeholder for a tool that is not installed.
    pub fn not_found(command: &str) -> Self {
        Self::Unavailable {
            command: command.to_string(),
            reason: UnavailableReason::NotFound {
                tool: tool_name(command).to_string(),
            },
        }
    }

    /// Classify a finished command.
    ///
    /// Non-zero exits that still printed something are kept as captured
    /// text: `npm list -g` exits 1 on peer warnings but prints a valid tree,
    /// and `java -version` reports to stderr.
    pub fn from_result(command: &str, result: &CommandResult, timeout: Option<Duration>) -> Self {
        if result.timed_out {
            return Self::Unavailable {
                command: command.to_string(),
                reason: UnavailableReason::TimedOut {
                    secs: timeout.unwrap_or(result.duration).as_secs(),
                },
            };
        }

        let text = result.output_text();

        if result.success {
            return Self::Captured(text.to_string());
        }

        if result.is_command_not_found() {
            return Self::not_found(command);
        }

        if !text.is_empty() {
            return Self::Captured(text.to_string());
        }

        Self::Unavailable {
            command: command.to_string(),
            reason: UnavailableReason::Failed {
                code: result.exit_code,
            },
        }
    }

    /// Whether the probe produced output.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Captured(_))
    }

    /// The captured text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Captured(text) => Some(text),
            Self::Unavailable { .. } => None,
        }
    }
}

impl fmt::Display for ProbeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Captured(text) => f.write_str(text),
            Self::Unavailable { command, reason } => match reason {
                UnavailableReason::NotFound { tool } => write!(f, "{} not found", tool),
                UnavailableReason::TimedOut { secs } => {
                    write!(f, "{} timed out after {}s", command, secs)
                }
                UnavailableReason::Failed { code: Some(code) } => {
                    write!(f, "{} exited with status {}", command, code)
                }
                UnavailableReason::Failed { code: None } => {
                    write!(f, "{} was terminated by a signal", command)
                }
                UnavailableReason::SpawnError { message } => write!(f, "Error: {}", message),
                UnavailableReason::Unrecognized => {
                    write!(f, "unrecognized output from {}", command)
                }
            },
        }
    }
}

impl Serialize for ProbeOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// First word of a command line, used to name the missing tool.
fn tool_name(command: &str) -> &str {
    command.split_whitespace().next().unwrap_or(command)
}

/// Runs probe commands.
///
/// Implementations must not panic or propagate errors; every failure
/// becomes a [`ProbeOutput::Unavailable`].
pub trait CommandRunner {
    /// Run a command line and capture its output.
    fn run(&self, command: &str) -> ProbeOutput;
}

impl<F> CommandRunner for F
where
    F: Fn(&str) -> ProbeOutput,
{
    fn run(&self, command: &str) -> ProbeOutput {
        self(command)
    }
}

/// Runs probes through the system shell (`/bin/sh`, or `%COMSPEC%` on Windows).
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    timeout: Option<Duration>,
}

impl ShellRunner {
    /// Create a runner with no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill probes that run longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured probe timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> ProbeOutput {
        tracing::debug!("Probing: {}", command);

        let options = CommandOptions {
            timeout: self.timeout,
            ..Default::default()
        };

        let output = match execute(command, &options) {
            Ok(result) => ProbeOutput::from_result(command, &result, self.timeout),
            Err(e) => ProbeOutput::Unavailable {
                command: command.to_string(),
                reason: UnavailableReason::SpawnError {
                    message: e.to_string(),
                },
            },
        };

        if !output.is_available() {
            tracing::debug!("Probe unavailable: {}", output);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ShellType;

    fn result(exit_code: Option<i32>, stdout: &str, stderr: &str) -> CommandResult {
        CommandResult {
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            duration: Duration::from_millis(5),
            success: exit_code == Some(0),
            timed_out: false,
            shell: ShellType::Bash,
        }
    }

    #[test]
    fn success_captures_stdout() {
        let output = ProbeOutput::from_result("node -v", &result(Some(0), "v20.1.0\n", ""), None);
        assert_eq!(output, ProbeOutput::Captured("v20.1.0".to_string()));
    }

    #[test]
    fn success_falls_back_to_stderr() {
        let output = ProbeOutput::from_result(
            "java -version",
            &result(Some(0), "", "openjdk version \"17.0.2\"\n"),
            None,
        );
        assert_eq!(output.text(), Some("openjdk version \"17.0.2\""));
    }

    #[test]
    fn shell_not_found_becomes_placeholder() {
        let output = ProbeOutput::from_result(
            "java -version",
            &result(Some(127), "", "sh: 1: java: not found"),
            None,
        );
        assert!(!output.is_available());
        assert_eq!(output.to_string(), "java not found");
    }

    #[test]
    fn failure_with_output_is_kept() {
        let output = ProbeOutput::from_result(
            "npm list -g --depth=0",
            &result(Some(1), "/usr/lib\n└── npm@10.2.0\n", "npm ERR! peer dep missing"),
            None,
        );
        assert!(output.is_available());
        assert!(output.to_string().contains("npm@10.2.0"));
    }

    #[test]
    fn silent_failure_is_unavailable() {
        let output = ProbeOutput::from_result("npm -v", &result(Some(2), "", ""), None);
        assert_eq!(output.to_string(), "npm -v exited with status 2");
    }

    #[test]
    fn timeout_reports_limit() {
        let mut timed_out = result(None, "", "");
        timed_out.timed_out = true;

        let output =
            ProbeOutput::from_result("npm list -g", &timed_out, Some(Duration::from_secs(30)));
        assert_eq!(output.to_string(), "npm list -g timed out after 30s");
    }

    #[test]
    fn spawn_error_display() {
        let output = ProbeOutput::Unavailable {
            command: "node -v".to_string(),
            reason: UnavailableReason::SpawnError {
                message: "No such file or directory".to_string(),
            },
        };
        assert_eq!(output.to_string(), "Error: No such file or directory");
    }

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&ProbeOutput::not_found("javac -version")).unwrap();
        assert_eq!(json, "\"javac not found\"");

        let json = serde_json::to_string(&ProbeOutput::Captured("10.2.0".into())).unwrap();
        assert_eq!(json, "\"10.2.0\"");
    }

    #[test]
    fn closures_are_runners() {
        let runner = |cmd: &str| ProbeOutput::Captured(format!("ran {}", cmd));
        assert_eq!(runner.run("node -v").text(), Some("ran node -v"));
    }

    #[test]
    fn shell_runner_never_fails_for_missing_executable() {
        let runner = ShellRunner::new().with_timeout(Some(Duration::from_secs(10)));
        let output = runner.run("envsync-definitely-not-a-real-binary -v");

        assert!(!output.to_string().is_empty());
    }

    #[test]
    fn shell_runner_captures_output() {
        let runner = ShellRunner::new();
        assert_eq!(runner.run("echo hello").text(), Some("hello"));
    }
}
