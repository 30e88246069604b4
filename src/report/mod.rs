//! Scan orchestration and report output.
//!
//! A scan is one full pass: collect a [`Snapshot`], parse the project's
//! manifests, reconcile them into a [`ConflictReport`]. The result is a
//! [`Report`] which can be rendered as JSON ([`writer`]) or published to
//! concurrent readers ([`CurrentReport`]).

pub mod current;
pub mod writer;

pub use current::CurrentReport;
pub use writer::{to_json_string, write_report};

use std::path::Path;

use serde::Serialize;

use crate::config::EnvsyncConfig;
use crate::error::Result;
use crate::inventory::{self, JavaInfo, NodeInfo, OsInfo, PythonInfo, Snapshot};
use crate::manifest::ProjectManifests;
use crate::reconcile::{reconcile, ConflictReport};
use crate::shell::CommandRunner;

/// The result of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub os: OsInfo,
    pub python: PythonInfo,
    pub java: JavaInfo,
    pub node: NodeInfo,
    pub conflicts: ConflictReport,
}

impl Report {
    /// Combine a snapshot with its reconciliation.
    pub fn new(snapshot: Snapshot, conflicts: ConflictReport) -> Self {
        Self {
            os: snapshot.os,
            python: snapshot.python,
            java: snapshot.java,
            node: snapshot.node,
            conflicts,
        }
    }

    /// Whether any ecosystem reported a finding.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Run a full scan of the host against the manifests in `project_root`.
///
/// One sequential pass: collect, parse manifests, reconcile. A malformed
/// manifest fails the whole scan and no report is produced.
pub fn scan(
    project_root: &Path,
    config: &EnvsyncConfig,
    runner: &dyn CommandRunner,
) -> Result<Report> {
    let snapshot = inventory::collect(runner, &config.probes.python);
    let manifests = ProjectManifests::load(project_root, &config.manifests)?;

    let conflicts = reconcile(&snapshot, &manifests);

    tracing::debug!("Scan complete: {} finding(s)", conflicts.total());
    Ok(Report::new(snapshot, conflicts))
}
