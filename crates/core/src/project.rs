use serde::{Deserialize, Serialize};

use crate::error::{Result, require};

/// Coordinates of the project the conventions are applied to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectInfo {
    /// # Errors
    /// Returns a configuration error if group, name or version is blank.
    pub fn validate(&self) -> Result<()> {
        require("project.group", &self.group)?;
        require("project.name", &self.name)?;
        require("project.version", &self.version)?;
        Ok(())
    }

    /// Description with blank values treated as absent
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
    }
}
