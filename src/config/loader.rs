//! Configuration file discovery and loading.
//!
//! The first existing file wins; files are not merged:
//! 1. An explicit `--config` path
//! 2. Project config (`.envsync/config.yml`)
//! 3. User global config (`~/.envsync/config.yml`)
//!
//! With none present the built-in defaults apply.

use crate::config::schema::EnvsyncConfig;
use crate::error::{EnvsyncError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding envsync configuration.
pub const CONFIG_DIR: &str = ".envsync";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Find project config at .envsync/config.yml
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_DIR).join(CONFIG_FILE);
    path.is_file().then_some(path)
}

/// Find user's global config at ~/.envsync/config.yml
pub fn find_user_config() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    path.is_file().then_some(path)
}

/// Load the configuration for a project.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<EnvsyncConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match find_project_config(project_root).or_else(find_user_config) {
        Some(path) => load_config_file(&path),
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(EnvsyncConfig::default())
        }
    }
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<EnvsyncConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvsyncError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvsyncError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into EnvsyncConfig.
///
/// An empty document is the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<EnvsyncConfig> {
    if content.trim().is_empty() {
        return Ok(EnvsyncConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvsyncError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_project_config(root: &Path, content: &str) {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), content).unwrap();
    }

    #[test]
    fn project_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        write_project_config(temp.path(), "probes:\n  python: python3.12\n");

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.probes.python, "python3.12");
    }

    #[test]
    fn explicit_path_wins() {
        let temp = TempDir::new().unwrap();
        write_project_config(temp.path(), "watch:\n  interval: 5\n");
        let explicit = temp.path().join("custom.yml");
        fs::write(&explicit, "watch:\n  interval: 60\n").unwrap();

        let config = load_config(temp.path(), Some(&explicit)).unwrap();
        assert_eq!(config.watch.interval, 60);
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(&temp.path().join("nope.yml")));
        assert!(matches!(result, Err(EnvsyncError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        write_project_config(temp.path(), "probes: [unclosed");

        let result = load_config(temp.path(), None);
        assert!(matches!(result, Err(EnvsyncError::ConfigParseError { .. })));
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse_config("   \n", Path::new("config.yml")).unwrap();
        assert_eq!(config, EnvsyncConfig::default());
    }

    #[test]
    fn find_project_config_requires_file() {
        let temp = TempDir::new().unwrap();
        assert!(find_project_config(temp.path()).is_none());

        write_project_config(temp.path(), "");
        assert!(find_project_config(temp.path()).is_some());
    }
}
