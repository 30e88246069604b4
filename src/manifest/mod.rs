//! Manifest parsing.
//!
//! Each supported ecosystem declares its dependencies in a different file:
//!
//! - [`requirements_txt`] - flat `name==version` lines (Python)
//! - [`package_json`] - the `dependencies` object of a JSON document (Node.js)
//! - [`pom`] - `<dependency>` elements of a Maven project descriptor (Java)
//!
//! Every parser returns an empty [`RequirementSet`] when its file does not
//! exist. A file that exists but is malformed is a
//! [`ManifestParseError`](crate::error::EnvsyncError::ManifestParseError).

pub mod package_json;
pub mod pom;
pub mod requirements_txt;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::ManifestConfig;
use crate::error::Result;

/// A single declared dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Dependency name, normalized the way its ecosystem compares names.
    pub name: String,

    /// Required version, or `None` when any version is acceptable.
    pub version: Option<String>,
}

impl Requirement {
    /// Create a requirement.
    pub fn new(name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            version: version.map(str::to_string),
        }
    }

    /// The required version, or `"any"` for presence-only requirements.
    pub fn version_label(&self) -> &str {
        self.version.as_deref().unwrap_or("any")
    }
}

/// Declared dependencies of one ecosystem, in manifest order.
///
/// Inserting a name that is already present replaces its version but keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet {
    entries: Vec<Requirement>,
}

impl RequirementSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a requirement.
    pub fn insert(&mut self, name: impl Into<String>, version: Option<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.version = version,
            None => self.entries.push(Requirement { name, version }),
        }
    }

    /// Look up a requirement by exact name.
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.entries.iter().find(|r| r.name == name)
    }

    /// Iterate in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.entries.iter()
    }

    /// Number of requirements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RequirementSet {
    type Item = &'a Requirement;
    type IntoIter = std::slice::Iter<'a, Requirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, Option<String>)> for RequirementSet {
    fn from_iter<I: IntoIterator<Item = (N, Option<String>)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, version) in iter {
            set.insert(name, version);
        }
        set
    }
}

/// Declared requirements of every ecosystem in a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectManifests {
    pub python: RequirementSet,
    pub node: RequirementSet,
    pub java: RequirementSet,
}

impl ProjectManifests {
    /// Parse all manifests below `project_root`.
    ///
    /// Relative paths in `config` are resolved against `project_root`.
    /// Stops at the first malformed manifest.
    pub fn load(project_root: &Path, config: &ManifestConfig) -> Result<Self> {
        let manifests = Self {
            python: requirements_txt::parse(&project_root.join(&config.requirements))?,
            node: package_json::parse(&project_root.join(&config.package_json))?,
            java: pom::parse(&project_root.join(&config.pom))?,
        };

        tracing::debug!(
            python = manifests.python.len(),
            node = manifests.node.len(),
            java = manifests.java.len(),
            "Loaded manifests"
        );
        Ok(manifests)
    }
}

/// Read a manifest, treating a missing file as `None`.
///
/// Any other I/O failure (permissions, a directory in place of the file)
/// is propagated.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!("Read manifest {}", path.display());
            Ok(Some(content))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
