//! Configuration schema definitions for envsync.
//!
//! This module contains the struct definitions that map to the
//! `.envsync/config.yml` file format. Every field has a default, so an
//! empty file (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvsyncConfig {
    /// Manifest file locations (relative to the project root).
    pub manifests: ManifestConfig,

    /// External tool probing.
    pub probes: ProbeConfig,

    /// Report file output.
    pub report: ReportConfig,

    /// `envsync watch` settings.
    pub watch: WatchConfig,
}

/// Where each ecosystem declares its dependencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Flat pinned-dependency list (Python).
    pub requirements: PathBuf,

    /// JSON manifest with a `dependencies` object (Node.js).
    pub package_json: PathBuf,

    /// Maven project descriptor (Java).
    pub pom: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            requirements: PathBuf::from("requirements.txt"),
            package_json: PathBuf::from("package.json"),
            pom: PathBuf::from("pom.xml"),
        }
    }
}

/// External tool probe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// Python interpreter to inspect.
    pub python: String,

    /// Seconds before a probe is killed. 0 disables the timeout.
    pub timeout: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            python: default_python().to_string(),
            timeout: 30,
        }
    }
}

impl ProbeConfig {
    /// Probe timeout, or `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

fn default_python() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Report file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// JSON report path (relative to the project root).
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("envsync_report.json"),
        }
    }
}

/// Watch mode settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    /// Seconds between scans.
    pub interval: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval: 30 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: EnvsyncConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, EnvsyncConfig::default());
        assert_eq!(config.manifests.pom, PathBuf::from("pom.xml"));
        assert_eq!(config.report.path, PathBuf::from("envsync_report.json"));
        assert_eq!(config.watch.interval, 30);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let yaml = r#"
manifests:
  requirements: requirements/prod.txt
probes:
  timeout: 5
"#;
        let config: EnvsyncConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            config.manifests.requirements,
            PathBuf::from("requirements/prod.txt")
        );
        assert_eq!(config.manifests.package_json, PathBuf::from("package.json"));
        assert_eq!(config.probes.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.probes.python, ProbeConfig::default().python);
    }

    #[test]
    fn zero_timeout_disables() {
        let probes = ProbeConfig {
            timeout: 0,
            ..Default::default()
        };
        assert!(probes.timeout().is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<EnvsyncConfig, _> = serde_yaml::from_str("dashboard: true");
        assert!(result.is_err());
    }
}
