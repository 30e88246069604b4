//! Conflict reconciliation.
//!
//! Compares each ecosystem's declared requirements with what the
//! [`Snapshot`] found installed, producing human-readable findings:
//!
//! - **Python**: structured comparison against the installed distributions.
//!   A missing package or a differing pinned version is a finding.
//! - **Node.js**: presence heuristic. A dependency is reported missing unless
//!   its name appears anywhere in the `npm list -g` dump. Names that are
//!   substrings of other packages can hide a missing dependency.
//! - **Java**: no installed-state comparison exists. Every declared
//!   dependency produces a "manual check" advisory.
//!
//! Reconciliation never fails. An empty requirement set gives no findings.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::inventory::Snapshot;
use crate::manifest::{ProjectManifests, RequirementSet};

/// A supported language ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Python,
    Node,
    Java,
}

impl Ecosystem {
    /// All ecosystems, in report order.
    pub const ALL: [Ecosystem; 3] = [Ecosystem::Python, Ecosystem::Node, Ecosystem::Java];

    /// Report key for this ecosystem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Python => "python",
            Ecosystem::Node => "node",
            Ecosystem::Java => "java",
        }
    }

    /// Human-facing name.
    pub fn label(&self) -> &'static str {
        match self {
            Ecosystem::Python => "Python",
            Ecosystem::Node => "Node.js",
            Ecosystem::Java => "Java",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Findings per ecosystem, in manifest order.
///
/// Always serializes with exactly the `python`, `node` and `java` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    pub python: Vec<String>,
    pub node: Vec<String>,
    pub java: Vec<String>,
}

impl ConflictReport {
    /// Findings for one ecosystem.
    pub fn findings(&self, ecosystem: Ecosystem) -> &[String] {
        match ecosystem {
            Ecosystem::Python => &self.python,
            Ecosystem::Node => &self.node,
            Ecosystem::Java => &self.java,
        }
    }

    /// Iterate ecosystems with their findings, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Ecosystem, &[String])> {
        Ecosystem::ALL.into_iter().map(|e| (e, self.findings(e)))
    }

    /// Total number of findings.
    pub fn total(&self) -> usize {
        self.python.len() + self.node.len() + self.java.len()
    }

    /// Whether no ecosystem has findings.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Reconcile all ecosystems.
pub fn reconcile(snapshot: &Snapshot, manifests: &ProjectManifests) -> ConflictReport {
    let global_packages = snapshot.node.global_packages.text().unwrap_or("");

    ConflictReport {
        python: python_findings(&manifests.python, &snapshot.python.packages),
        node: node_findings(&manifests.node, global_packages),
        java: java_findings(&manifests.java),
    }
}

/// Compare Python requirements with installed distributions.
///
/// Names are compared lower-cased. A requirement without a version is
/// satisfied by any installed version.
pub fn python_findings(
    required: &RequirementSet,
    installed: &BTreeMap<String, String>,
) -> Vec<String> {
    let mut findings = Vec::new();

    for requirement in required {
        let name = requirement.name.to_lowercase();

        match (installed.get(&name), requirement.version.as_deref()) {
            (None, _) => findings.push(format!(
                "{} missing (required {})",
                name,
                requirement.version_label()
            )),
            (Some(found), Some(wanted)) if found != wanted => findings.push(format!(
                "{} version mismatch: required {}, found {}",
                name, wanted, found
            )),
            _ => {}
        }
    }

    findings
}

/// Check Node.js requirements against the free-text `npm list -g` dump.
pub fn node_findings(required: &RequirementSet, global_packages: &str) -> Vec<String> {
    required
        .iter()
        .filter(|r| !global_packages.contains(r.name.as_str()))
        .map(|r| format!("{} missing (required {})", r.name, r.version_label()))
        .collect()
}

/// One advisory per declared Java dependency.
pub fn java_findings(required: &RequirementSet) -> Vec<String> {
    required
        .iter()
        .map(|r| format!("{} requires {} (manual check)", r.name, r.version_label()))
        .collect()
}
