//! Maven `pom.xml` parser.
//!
//! Every `<dependency>` element in the POM namespace is collected, wherever
//! it appears (`<dependencies>`, `<dependencyManagement>`, profiles,
//! plugin dependencies).

use std::path::Path;

use roxmltree::{Document, Node};

use super::{read_optional, RequirementSet};
use crate::error::{EnvsyncError, Result};

/// Maven POM 4.0.0 namespace.
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

/// Parse a `pom.xml` file. A missing file yields an empty set.
pub fn parse(path: &Path) -> Result<RequirementSet> {
    match read_optional(path)? {
        Some(content) => parse_str(&content).map_err(|message| EnvsyncError::manifest(path, message)),
        None => Ok(RequirementSet::new()),
    }
}

/// Parse POM text into `artifactId -> version` requirements.
///
/// A dependency without a `<version>` child has no version constraint.
/// A dependency without an `<artifactId>` child is rejected.
pub fn parse_str(content: &str) -> std::result::Result<RequirementSet, String> {
    let doc = Document::parse(content).map_err(|e| e.to_string())?;
    let mut requirements = RequirementSet::new();

    for dependency in doc
        .descendants()
        .filter(|n| n.has_tag_name((POM_NAMESPACE, "dependency")))
    {
        let artifact = child_text(dependency, "artifactId").ok_or_else(|| {
            let pos = doc.text_pos_at(dependency.range().start);
            format!("<dependency> at {} has no <artifactId>", pos)
        })?;
        let version = child_text(dependency, "version");

        requirements.insert(artifact, version);
    }

    Ok(requirements)
}

fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|c| c.has_tag_name((POM_NAMESPACE, name)))
        .map(|c| c.text().unwrap_or("").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>demo</artifactId>
  <dependencies>
    <dependency>
      <groupId>org.springframework.boot</groupId>
      <artifactId>spring-boot-starter-web</artifactId>
      <version>3.2.0</version>
    </dependency>
    <dependency>
      <groupId>org.projectlombok</groupId>
      <artifactId>lombok</artifactId>
    </dependency>
  </dependencies>
  <build>
    <plugins>
      <plugin>
        <artifactId>maven-surefire-plugin</artifactId>
        <dependencies>
          <dependency>
            <groupId>org.junit.platform</groupId>
            <artifactId>junit-platform-surefire-provider</artifactId>
            <version>1.3.2</version>
          </dependency>
        </dependencies>
      </plugin>
    </plugins>
  </build>
</project>"#;

    #[test]
    fn collects_every_dependency() {
        let reqs = parse_str(POM).unwrap();

        let names: Vec<_> = reqs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "spring-boot-starter-web",
                "lombok",
                "junit-platform-surefire-provider"
            ]
        );
    }

    #[test]
    fn missing_version_is_none() {
        let reqs = parse_str(POM).unwrap();
        assert_eq!(
            reqs.get("spring-boot-starter-web").unwrap().version.as_deref(),
            Some("3.2.0")
        );
        assert!(reqs.get("lombok").unwrap().version.is_none());
    }

    #[test]
    fn ignores_elements_outside_the_namespace() {
        let reqs = parse_str(
            r#"<project><dependencies><dependency><artifactId>x</artifactId></dependency></dependencies></project>"#,
        )
        .unwrap();
        assert!(reqs.is_empty());
    }

    #[test]
    fn dependency_without_artifact_id_is_rejected() {
        let err = parse_str(
            r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
<dependencies><dependency><version>1.0</version></dependency></dependencies>
</project>"#,
        )
        .unwrap_err();
        assert!(err.contains("artifactId"));
    }

    #[test]
    fn invalid_xml_is_rejected() {
        assert!(parse_str("<project><dependencies>").is_err());
    }

    #[test]
    fn missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(parse(&temp.path().join("pom.xml")).unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_manifest_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pom.xml");
        fs::write(&path, "<project").unwrap();

        let err = parse(&path).unwrap_err();
        assert!(matches!(err, EnvsyncError::ManifestParseError { .. }));
    }
}
