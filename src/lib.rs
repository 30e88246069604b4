//! Envsync - Environment inventory and conflict detection.
//!
//! Envsync records what is installed on a machine (OS, Python distributions,
//! Java and Node.js toolchains), reads the dependencies a project declares in
//! `requirements.txt`, `package.json` and `pom.xml`, and reports where the two
//! disagree.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and schema
//! - [`error`] - Error types and result aliases
//! - [`inventory`] - Host environment snapshot
//! - [`manifest`] - Dependency manifest parsers
//! - [`reconcile`] - Comparison of requirements with installed state
//! - [`report`] - Scan orchestration and JSON report output
//! - [`shell`] - Shell command execution and tool probing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use envsync::config::EnvsyncConfig;
//! use envsync::report::scan;
//! use envsync::shell::ProbeOutput;
//! use tempfile::TempDir;
//!
//! let project = TempDir::new().unwrap();
//! std::fs::write(project.path().join("requirements.txt"), "flask==2.3.2\n").unwrap();
//!
//! // Pretend no toolchain is installed.
//! let runner = |cmd: &str| ProbeOutput::not_found(cmd);
//! let report = scan(project.path(), &EnvsyncConfig::default(), &runner).unwrap();
//!
//! assert_eq!(report.conflicts.python, vec!["flask missing (required 2.3.2)"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod manifest;
pub mod reconcile;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{EnvsyncError, Result};
