//! The merged configuration handed to the build orchestrator.
//!
//! Field order is fixed by the struct definitions, plugin tags are kept sorted and
//! dependency order follows the input, so equal inputs always render to the same bytes.

use serde::{Deserialize, Serialize};

use crate::descriptor::PluginPublishDescriptor;
use crate::error::Result;
use crate::license::LicenseKind;
use crate::profile::Developer;
use crate::project::ProjectInfo;
use crate::relocation::Relocation;
use crate::target::DependencyScope;

/// Oldest Gradle release the generated configuration is meant for.
pub const MINIMUM_GRADLE_VERSION: &str = "7.5";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConventionDocument {
    pub minimum_gradle_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectInfo>,
    pub java: JavaSection,
    pub license: LicenseSection,
    pub publishing: PublishingSection,
    pub dependencies: Vec<DependencyEntry>,
    pub shadow: ShadowSection,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JavaSection {
    pub language_level: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LicenseSection {
    pub spdx: LicenseKind,
    pub name: String,
    pub url: String,
    /// Header text exactly as read from the license file
    pub header: String,
    /// Whether a blank line separates the header from the code
    pub new_line: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublishingSection {
    pub pom: PomSection,
    pub website: String,
    pub plugins: Vec<PluginPublishDescriptor>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PomSection {
    pub organization: OrganizationSection,
    pub developers: Vec<Developer>,
    pub licenses: Vec<PomLicense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<ScmSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_management: Option<IssueManagementSection>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSection {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PomLicense {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScmSection {
    pub url: String,
    pub connection: String,
    pub developer_connection: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueManagementSection {
    pub system: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DependencyEntry {
    pub scope: DependencyScope,
    pub coordinate: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShadowSection {
    /// Empty so the shaded jar replaces the plain one
    pub archive_classifier: String,
    /// Copy the shaded jar into the root project's build directory
    pub copy_to_root_build: bool,
    pub relocations: Vec<Relocation>,
}

/// Serialization format of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "conventions.json",
            Self::Yaml => "conventions.yaml",
        }
    }
}

impl ConventionDocument {
    #[must_use]
    pub fn language_level(&self) -> u32 {
        self.java.language_level
    }

    #[must_use]
    pub fn with_project(mut self, project: ProjectInfo) -> Self {
        self.project = Some(project);
        self
    }

    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// # Errors
    /// Returns error if `content` is not a valid document.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// # Errors
    /// Returns error if `content` is not a valid document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// # Errors
    /// Returns error if serialization fails.
    pub fn render(&self, format: DocumentFormat) -> Result<String> {
        match format {
            DocumentFormat::Json => self.to_json(),
            DocumentFormat::Yaml => self.to_yaml(),
        }
    }

    /// # Errors
    /// Returns error if `content` is not a valid document in `format`.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Json => Self::from_json(content),
            DocumentFormat::Yaml => Self::from_yaml(content),
        }
    }
}
