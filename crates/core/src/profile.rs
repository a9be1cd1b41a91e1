use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConventionError, Result, require};
use crate::license::LicenseKind;

/// A developer contact written to the POM `<developers>` block.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub email: String,
    /// IANA zone name, e.g. `America/Sao_Paulo`
    pub timezone: String,
}

impl Developer {
    /// # Errors
    /// Returns a configuration error naming the first blank or malformed field.
    pub fn validate(&self, index: usize) -> Result<()> {
        let field = |name: &str| format!("organization.developers[{index}].{name}");
        require(&field("id"), &self.id)?;
        require(&field("name"), &self.name)?;
        require(&field("email"), &self.email)?;
        require(&field("timezone"), &self.timezone)?;
        if !self.email.contains('@') {
            return Err(ConventionError::configuration(
                field("email"),
                format!("`{}` is not an email address", self.email),
            ));
        }
        Ok(())
    }
}

/// Owner/name pair of a GitHub repository.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GithubRepo {
    pub owner: String,
    pub name: String,
}

impl GithubRepo {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }

    #[must_use]
    pub fn scm_connection(&self) -> String {
        format!("scm:git:https://github.com/{}/{}.git", self.owner, self.name)
    }

    #[must_use]
    pub fn developer_connection(&self) -> String {
        format!("scm:git:ssh://git@github.com/{}/{}.git", self.owner, self.name)
    }

    #[must_use]
    pub fn issues_url(&self) -> String {
        format!("{}/issues", self.url())
    }

    fn validate(&self) -> Result<()> {
        require("organization.github.owner", &self.owner)?;
        require("organization.github.name", &self.name)?;
        for (field, value) in [
            ("organization.github.owner", &self.owner),
            ("organization.github.name", &self.name),
        ] {
            if value.contains('/') || value.chars().any(char::is_whitespace) {
                return Err(ConventionError::configuration(
                    field,
                    format!("`{value}` is not a repository path segment"),
                ));
            }
        }
        Ok(())
    }
}

/// Organization-wide identity shared by every project that applies the conventions.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationProfile {
    pub name: String,
    pub website: String,
    pub license: LicenseKind,
    /// Path of the header text, read verbatim by the applier
    pub license_file: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubRepo>,
    #[serde(default)]
    pub developers: Vec<Developer>,
}

impl OrganizationProfile {
    /// # Errors
    /// Returns a configuration error for the first incomplete field.
    pub fn validate(&self) -> Result<()> {
        require("organization.name", &self.name)?;
        require("organization.website", &self.website)?;
        if !(self.website.starts_with("https://") || self.website.starts_with("http://")) {
            return Err(ConventionError::configuration(
                "organization.website",
                format!("`{}` is not an http(s) URL", self.website),
            ));
        }
        if self.license_file.as_os_str().is_empty() {
            return Err(ConventionError::configuration(
                "organization.licenseFile",
                "must not be empty",
            ));
        }
        if let Some(github) = &self.github {
            github.validate()?;
        }
        for (index, developer) in self.developers.iter().enumerate() {
            developer.validate(index)?;
        }
        Ok(())
    }

    /// Anchors a relative license path at `base`.
    #[must_use]
    pub fn with_license_base(mut self, base: &Path) -> Self {
        if self.license_file.is_relative() {
            self.license_file = base.join(&self.license_file);
        }
        self
    }

    /// Website advertised on the plugin portal: the repository when known.
    #[must_use]
    pub fn publish_website(&self) -> String {
        self.github
            .as_ref()
            .map_or_else(|| self.website.clone(), GithubRepo::url)
    }
}
