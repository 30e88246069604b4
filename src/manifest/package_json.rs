//! `package.json` parser.
//!
//! Only the `dependencies` object is read. Names are kept exactly as
//! declared because the Node.js check matches them literally against the
//! output of `npm list`.

use std::path::Path;

use serde_json::Value;

use super::{read_optional, RequirementSet};
use crate::error::{EnvsyncError, Result};

/// Parse a `package.json` file. A missing file yields an empty set.
pub fn parse(path: &Path) -> Result<RequirementSet> {
    match read_optional(path)? {
        Some(content) => parse_str(&content).map_err(|message| EnvsyncError::manifest(path, message)),
        None => Ok(RequirementSet::new()),
    }
}

/// Parse `package.json` text.
///
/// A document without a `dependencies` field yields an empty set.
pub fn parse_str(content: &str) -> std::result::Result<RequirementSet, String> {
    let document: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let root = document
        .as_object()
        .ok_or_else(|| "expected a JSON object at the top level".to_string())?;

    let dependencies = match root.get("dependencies") {
        None | Some(Value::Null) => return Ok(RequirementSet::new()),
        Some(Value::Object(map)) => map,
        Some(_) => return Err("`dependencies` must be an object".to_string()),
    };

    Ok(dependencies
        .iter()
        .map(|(name, spec)| (name.as_str(), version_spec(spec)))
        .collect())
}

fn version_spec(spec: &Value) -> Option<String> {
    match spec {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
