//! JSON report rendering.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::Report;
use crate::error::{EnvsyncError, Result};

const INDENT: &[u8] = b"    ";

/// Render a value as pretty JSON with 4-space indentation.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| EnvsyncError::Other(e.into()))
}

/// Write a report file.
///
/// The content goes to a sibling temp file first and is renamed over
/// `path`, so readers see either the previous report or the new one.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let content = to_json_string(report)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    tracing::debug!("Wrote report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvsyncConfig;
    use crate::report::scan;
    use crate::shell::ProbeOutput;
    use tempfile::TempDir;

    fn sample_report(root: &Path) -> Report {
        let runner = |cmd: &str| ProbeOutput::not_found(cmd);
        scan(root, &EnvsyncConfig::default(), &runner).unwrap()
    }

    #[test]
    fn uses_four_space_indent() {
        let temp = TempDir::new().unwrap();
        let json = to_json_string(&sample_report(temp.path())).unwrap();

        assert!(json.starts_with("{\n    \"os\": {\n        \""));
    }

    #[test]
    fn renders_conflicts_alone() {
        let conflicts = crate::reconcile::ConflictReport {
            java: vec!["junit requires 4.13 (manual check)".into()],
            ..Default::default()
        };
        let json = to_json_string(&conflicts).unwrap();

        assert_eq!(
            json,
            "{\n    \"python\": [],\n    \"node\": [],\n    \"java\": [\n        \"junit requires 4.13 (manual check)\"\n    ]\n}"
        );
    }

    #[test]
    fn placeholders_are_strings() {
        let temp = TempDir::new().unwrap();
        let json = to_json_string(&sample_report(temp.path())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["java"]["version"], "java not found");
        assert_eq!(value["node"]["global_packages"], "npm not found");
        assert_eq!(value["conflicts"]["java"], serde_json::json!([]));
    }

    #[test]
    fn write_creates_parent_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("envsync_report.json");

        write_report(&sample_report(temp.path()), &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value.get("conflicts").is_some());
    }

    #[test]
    fn write_replaces_existing_report() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("envsync_report.json");
        fs::write(&path, "stale").unwrap();

        write_report(&sample_report(temp.path()), &path).unwrap();

        assert!(fs::read_to_string(&path).unwrap().starts_with('{'));
    }
}
