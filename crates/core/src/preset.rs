use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::target::{BuildTargetSpec, DependencySpec};

/// Named language-level templates for the applier.
///
/// Both presets share every other convention; they differ only in the Java release
/// they target.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Java8,
    Java11,
}

impl Preset {
    #[must_use]
    pub const fn language_level(&self) -> u32 {
        match self {
            Self::Java8 => 8,
            Self::Java11 => 11,
        }
    }

    #[must_use]
    pub fn target_spec(&self, dependencies: Vec<DependencySpec>) -> BuildTargetSpec {
        BuildTargetSpec {
            language_level: self.language_level(),
            dependencies,
        }
    }

    /// Keeps the dependency policy of `spec` and replaces its language level.
    #[must_use]
    pub fn override_target(&self, spec: &BuildTargetSpec) -> BuildTargetSpec {
        self.target_spec(spec.dependencies.clone())
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Java8 => "Java 8".yellow().bold(),
                Self::Java11 => "Java 11".red().bold(),
            }
        )
    }
}
