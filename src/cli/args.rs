//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Envsync - Compare installed toolchains with project manifests.
#[derive(Debug, Parser)]
#[command(name = "envsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .envsync/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inventory the environment and write a report (default if no command specified)
    Scan(ScanArgs),

    /// Exit non-zero when any conflict is found
    Check(CheckArgs),

    /// Rescan on an interval, rewriting the report after each scan
    Watch(WatchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Print the JSON report instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Report file path (overrides report.path from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Don't write the report file
    #[arg(long, conflicts_with = "output")]
    pub no_write: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Print conflicts as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WatchArgs {
    /// Seconds between scans (overrides watch.interval from config)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Stop after this many scans
    #[arg(short = 'n', long)]
    pub count: Option<u64>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
