//! Shell command execution and tool probes.

pub mod command;
pub mod platform;
pub mod probe;

pub use command::{execute, CommandOptions, CommandResult};
pub use platform::{detect_shell, is_ci, ShellInfo, ShellType};
pub use probe::{CommandRunner, ProbeOutput, ShellRunner, UnavailableReason};
