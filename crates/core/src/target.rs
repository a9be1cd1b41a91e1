use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConventionError, Result};

/// Lowest Java release the conventions will target.
pub const MIN_LANGUAGE_LEVEL: u32 = 8;
/// Highest Java release the conventions know about.
pub const MAX_LANGUAGE_LEVEL: u32 = 25;

/// Gradle configuration a dependency is declared in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum DependencyScope {
    #[default]
    Implementation,
    Api,
    CompileOnly,
    RuntimeOnly,
    TestImplementation,
}

impl DependencyScope {
    #[must_use]
    pub const fn configuration_name(&self) -> &'static str {
        match self {
            Self::Implementation => "implementation",
            Self::Api => "api",
            Self::CompileOnly => "compileOnly",
            Self::RuntimeOnly => "runtimeOnly",
            Self::TestImplementation => "testImplementation",
        }
    }
}

impl Display for DependencyScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.configuration_name())
    }
}

/// `group:artifact[:version[:classifier]]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: Option<String>,
    pub classifier: Option<String>,
}

impl FromStr for Coordinate {
    type Err = ConventionError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || {
            ConventionError::configuration(
                "target.dependencies",
                format!("`{s}` is not a group:artifact[:version[:classifier]] coordinate"),
            )
        };
        let parts: Vec<&str> = s.split(':').collect();
        if !(2..=4).contains(&parts.len())
            || parts
                .iter()
                .any(|part| part.is_empty() || part.chars().any(char::is_whitespace))
        {
            return Err(malformed());
        }
        Ok(Self {
            group: parts[0].to_string(),
            artifact: parts[1].to_string(),
            version: parts.get(2).map(|v| (*v).to_string()),
            classifier: parts.get(3).map(|c| (*c).to_string()),
        })
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

/// A dependency as written in config: a bare coordinate or a coordinate with a scope.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum DependencySpec {
    Coordinate(String),
    Scoped {
        coordinate: String,
        #[serde(default)]
        scope: DependencyScope,
    },
}

impl DependencySpec {
    pub fn scoped(coordinate: impl Into<String>, scope: DependencyScope) -> Self {
        Self::Scoped {
            coordinate: coordinate.into(),
            scope,
        }
    }

    #[must_use]
    pub fn coordinate(&self) -> &str {
        match self {
            Self::Coordinate(coordinate) | Self::Scoped { coordinate, .. } => coordinate,
        }
    }

    #[must_use]
    pub fn scope(&self) -> DependencyScope {
        match self {
            Self::Coordinate(_) => DependencyScope::Implementation,
            Self::Scoped { scope, .. } => *scope,
        }
    }
}

/// Language level and dependency policy for the target project.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildTargetSpec {
    pub language_level: u32,
    /// Declaration order is kept, it decides classpath precedence
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,
}

impl BuildTargetSpec {
    pub fn new(language_level: u32) -> Self {
        Self {
            language_level,
            dependencies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dependency(mut self, dependency: DependencySpec) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("net.kyori:indra-common:3.1.3", "net.kyori", "indra-common", Some("3.1.3"), None)]
    #[case("com.google.code.findbugs:jsr305", "com.google.code.findbugs", "jsr305", None, None)]
    #[case("org.lwjgl:lwjgl:3.3.1:natives-linux", "org.lwjgl", "lwjgl", Some("3.3.1"), Some("natives-linux"))]
    fn test_parse_coordinate(
        #[case] input: &str,
        #[case] group: &str,
        #[case] artifact: &str,
        #[case] version: Option<&str>,
        #[case] classifier: Option<&str>,
    ) {
        let coordinate: Coordinate = input.parse().unwrap();
        assert_eq!(coordinate.group, group);
        assert_eq!(coordinate.artifact, artifact);
        assert_eq!(coordinate.version.as_deref(), version);
        assert_eq!(coordinate.classifier.as_deref(), classifier);
        assert_eq!(coordinate.to_string(), input);
    }

    #[rstest]
    #[case("jsr305")]
    #[case("a::1.0")]
    #[case(":a:1.0")]
    #[case("a:b:c:d:e")]
    #[case("a:b c:1.0")]
    #[case("")]
    fn test_parse_malformed_coordinate(#[case] input: &str) {
        let result: Result<Coordinate> = input.parse();
        assert!(matches!(result, Err(ConventionError::Configuration { .. })));
    }

    #[test]
    fn test_dependency_spec_forms() {
        let yaml = r#"
- net.kyori:indra-common:3.1.3
- coordinate: com.google.code.findbugs:jsr305:3.0.2
  scope: compileOnly
- coordinate: com.fasterxml.jackson.core:jackson-databind:2.15.2
"#;
        let specs: Vec<DependencySpec> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].scope(), DependencyScope::Implementation);
        assert_eq!(specs[0].coordinate(), "net.kyori:indra-common:3.1.3");
        assert_eq!(specs[1].scope(), DependencyScope::CompileOnly);
        assert_eq!(specs[2].scope(), DependencyScope::Implementation);
    }

    #[rstest]
    #[case(DependencyScope::Implementation, "implementation")]
    #[case(DependencyScope::Api, "api")]
    #[case(DependencyScope::CompileOnly, "compileOnly")]
    #[case(DependencyScope::RuntimeOnly, "runtimeOnly")]
    #[case(DependencyScope::TestImplementation, "testImplementation")]
    fn test_scope_configuration_name(#[case] scope: DependencyScope, #[case] expected: &str) {
        assert_eq!(scope.to_string(), expected);
        assert_eq!(
            serde_json::to_string(&scope).unwrap(),
            format!("\"{expected}\"")
        );
    }
}
