//! Environment inventory.
//!
//! [`collect`] builds a fresh [`Snapshot`] of the host on every call:
//! OS identity read in-process, Python distributions enumerated from
//! interpreter metadata, and Java/Node.js facts probed through a
//! [`CommandRunner`]. Nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use envsync::inventory::collect;
//! use envsync::shell::ProbeOutput;
//!
//! // A host with no language toolchains at all still yields a full snapshot.
//! let runner = |cmd: &str| ProbeOutput::not_found(cmd);
//! let snapshot = collect(&runner, "python3");
//! assert_eq!(snapshot.java.version.to_string(), "java not found");
//! assert!(snapshot.python.packages.is_empty());
//! ```

pub mod os;
pub mod python;
pub mod toolchain;

pub use os::OsInfo;
pub use python::PythonInfo;
pub use toolchain::{JavaInfo, NodeInfo};

use serde::Serialize;

use crate::shell::CommandRunner;

/// Installed state of the host, captured by one collection pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub os: OsInfo,
    pub python: PythonInfo,
    pub java: JavaInfo,
    pub node: NodeInfo,
}

/// Collect a snapshot of the host environment.
///
/// `python` names the interpreter to inspect (e.g. `python3`).
pub fn collect(runner: &dyn CommandRunner, python: &str) -> Snapshot {
    tracing::debug!("Collecting environment snapshot");

    Snapshot {
        os: OsInfo::detect(),
        python: python::collect(runner, python),
        java: JavaInfo::collect(runner),
        node: NodeInfo::collect(runner),
    }
}
