//! Configuration loading and schema for envsync.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use envsync::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".envsync");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "probes:\n  timeout: 10\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.probes.timeout, 10);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, find_user_config, load_config, load_config_file, parse_config,
    CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{EnvsyncConfig, ManifestConfig, ProbeConfig, ReportConfig, WatchConfig};
