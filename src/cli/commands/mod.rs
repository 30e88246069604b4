//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! configuration once and routes CLI subcommands to their implementations.
//! Scanning commands probe through a [`ShellRunner`](crate::shell::ShellRunner)
//! unless a different [`CommandRunner`](crate::shell::CommandRunner) is
//! supplied with `with_runner`.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod scan;
pub mod watch;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
