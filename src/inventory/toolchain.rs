//! Java and Node.js toolchains, probed through their own CLIs.

use serde::Serialize;

use crate::shell::{CommandRunner, ProbeOutput};

pub const JAVA_VERSION: &str = "java -version";
pub const JAVAC_VERSION: &str = "javac -version";
pub const NODE_VERSION: &str = "node -v";
pub const NPM_VERSION: &str = "npm -v";
pub const NPM_GLOBAL_LIST: &str = "npm list -g --depth=0";

/// Java runtime and compiler versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JavaInfo {
    /// Output of `java -version` (printed on stderr by most JDKs).
    pub version: ProbeOutput,
    /// Output of `javac -version`.
    pub javac_version: ProbeOutput,
}

impl JavaInfo {
    pub fn collect(runner: &dyn CommandRunner) -> Self {
        Self {
            version: runner.run(JAVA_VERSION),
            javac_version: runner.run(JAVAC_VERSION),
        }
    }
}

/// Node.js runtime, npm version and the global package tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub version: ProbeOutput,
    pub npm_version: ProbeOutput,
    /// Free-text `npm list -g` dump; only ever searched by substring.
    pub global_packages: ProbeOutput,
}

impl NodeInfo {
    pub fn collect(runner: &dyn CommandRunner) -> Self {
        Self {
            version: runner.run(NODE_VERSION),
            npm_version: runner.run(NPM_VERSION),
            global_packages: runner.run(NPM_GLOBAL_LIST),
        }
    }
}
