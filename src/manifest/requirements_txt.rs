//! Flat `requirements.txt` parser.

use std::path::Path;

use super::{read_optional, RequirementSet};
use crate::error::Result;

/// Parse a requirements file. A missing file yields an empty set.
pub fn parse(path: &Path) -> Result<RequirementSet> {
    Ok(read_optional(path)?
        .map(|content| parse_str(&content))
        .unwrap_or_default())
}

/// Parse requirements text.
///
/// Blank lines and `#` comments are skipped. `name==version` pins a version;
/// any other line is a presence-only requirement. Names are lower-cased.
pub fn parse_str(content: &str) -> RequirementSet {
    let mut requirements = RequirementSet::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once("==") {
            Some((name, version)) => {
                requirements.insert(name.trim().to_lowercase(), Some(version.trim().to_string()))
            }
            None => requirements.insert(line.to_lowercase(), None),
        }
    }

    requirements
}
