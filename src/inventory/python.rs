//! Python interpreter and installed distributions.
//!
//! The interpreter is asked once for its version, executable and module
//! search path. Installed distributions are then enumerated in-process by
//! reading the `*.dist-info` and `*.egg-info` metadata found on that path,
//! the same metadata Python's own `importlib.metadata` reads.
//!
//! Installed names are keyed the way setuptools keys them: every run of
//! characters other than ASCII letters, digits and `.` becomes `-`, then the
//! result is lower-cased. A `typing_extensions` distribution is therefore
//! found by a `typing-extensions` requirement. Requirement names are only
//! lower-cased, so a requirement spelled `typing_extensions` is reported
//! missing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shell::{CommandRunner, ProbeOutput, UnavailableReason};

/// One-line script printing the interpreter facts as JSON.
const INTERPRETER_SCRIPT: &str = "import json, sys; print(json.dumps({'version': sys.version.split()[0], 'executable': sys.executable, 'path': sys.path}))";

/// `name-version[-pyX.Y].dist-info` / `.egg-info` directory names.
static DIST_DIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?)-(?P<version>[^-]+?)(?:-py\d+(?:\.\d+)*)?\.(?:dist|egg)-info$")
        .expect("DIST_DIR_REGEX must compile")
});

/// Characters folded to `-` in distribution keys.
static NAME_SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9.]+").expect("NAME_SEPARATOR_REGEX must compile")
});

/// Python runtime facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PythonInfo {
    /// Interpreter version (e.g. `3.12.1`) or a placeholder.
    pub version: ProbeOutput,
    /// Interpreter executable path or a placeholder.
    pub executable: ProbeOutput,
    /// Installed distributions, keyed by [`distribution_key`].
    pub packages: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct InterpreterFacts {
    version: String,
    executable: String,
    #[serde(default)]
    path: Vec<String>,
}

/// Command line that prints the interpreter facts.
pub fn interpreter_command(interpreter: &str) -> String {
    format!("{} -c \"{}\"", interpreter, INTERPRETER_SCRIPT)
}

/// Probe the interpreter and enumerate its installed distributions.
pub fn collect(runner: &dyn CommandRunner, interpreter: &str) -> PythonInfo {
    let command = interpreter_command(interpreter);
    let output = runner.run(&command);

    match output.text().and_then(parse_facts) {
        Some(facts) => {
            let search_path: Vec<PathBuf> = facts
                .path
                .iter()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .collect();

            PythonInfo {
                version: ProbeOutput::Captured(facts.version),
                executable: ProbeOutput::Captured(facts.executable),
                packages: installed_packages(&search_path),
            }
        }
        None => {
            let placeholder = if output.is_available() {
                ProbeOutput::Unavailable {
                    command: interpreter.to_string(),
                    reason: UnavailableReason::Unrecognized,
                }
            } else {
                output
            };
            tracing::debug!("Python interpreter unavailable: {}", placeholder);

            PythonInfo {
                version: placeholder.clone(),
                executable: placeholder,
                packages: BTreeMap::new(),
            }
        }
    }
}

/// Find the JSON line in the interpreter output.
///
/// Shell startup files may print banners first, so the last parseable line wins.
fn parse_facts(text: &str) -> Option<InterpreterFacts> {
    text.lines()
        .rev()
        .map(str::trim)
        .filter(|line| line.starts_with('{'))
        .find_map(|line| serde_json::from_str(line).ok())
}

/// Enumerate distributions installed under the given directories.
///
/// Directories are searched in order and the first distribution found for a
/// name wins, matching how the interpreter resolves imports.
pub fn installed_packages(search_path: &[PathBuf]) -> BTreeMap<String, String> {
    let mut packages = BTreeMap::new();

    for dir in search_path {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };

        let mut candidates: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
        candidates.sort();

        for path in candidates {
            if let Some((name, version)) = read_distribution(&path) {
                packages.entry(distribution_key(&name)).or_insert(version);
            }
        }
    }

    packages
}

/// Comparison key for an installed distribution name.
pub fn distribution_key(name: &str) -> String {
    NAME_SEPARATOR_REGEX.replace_all(name, "-").to_lowercase()
}

/// Read name and version of a single `.dist-info` / `.egg-info` entry.
fn read_distribution(path: &Path) -> Option<(String, String)> {
    let file_name = path.file_name()?.to_str()?;

    let metadata_file = if file_name.ends_with(".dist-info") {
        path.join("METADATA")
    } else if file_name.ends_with(".egg-info") {
        if path.is_dir() {
            path.join("PKG-INFO")
        } else {
            path.to_path_buf()
        }
    } else {
        return None;
    };

    let from_metadata = match fs::read_to_string(&metadata_file) {
        Ok(content) => parse_metadata(&content),
        Err(e) => {
            tracing::debug!("Unreadable metadata {}: {}", metadata_file.display(), e);
            None
        }
    };

    from_metadata.or_else(|| parse_dist_dir_name(file_name))
}

/// Extract `Name` and `Version` from core metadata headers.
fn parse_metadata(content: &str) -> Option<(String, String)> {
    let mut name = None;
    let mut version = None;

    for line in content.lines() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Name:") {
            name.get_or_insert_with(|| value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("Version:") {
            version.get_or_insert_with(|| value.trim().to_string());
        }
    }

    match (name, version) {
        (Some(n), Some(v)) if !n.is_empty() => Some((n, v)),
        _ => None,
    }
}

fn parse_dist_dir_name(file_name: &str) -> Option<(String, String)> {
    let caps = DIST_DIR_REGEX.captures(file_name)?;
    Some((caps["name"].to_string(), caps["version"].to_string()))
}
