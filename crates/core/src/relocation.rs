use serde::{Deserialize, Serialize};

use crate::error::{ConventionError, Result, require};

/// Package relocation applied while shading dependencies into the final jar.
///
/// Two relocations describe the same mapping when their [`Relocation::key`] matches,
/// whatever their include/exclude filters.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Relocation {
    pub pattern: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

impl Relocation {
    pub fn new(pattern: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            destination: destination.into(),
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// The (pattern, destination) pair identifying this mapping.
    #[must_use]
    pub fn key(&self) -> (&str, &str) {
        (&self.pattern, &self.destination)
    }

    /// # Errors
    /// Returns a configuration error if either side is blank or both sides are equal.
    pub fn validate(&self, index: usize) -> Result<()> {
        require(&format!("relocations[{index}].pattern"), &self.pattern)?;
        require(&format!("relocations[{index}].destination"), &self.destination)?;
        if self.pattern == self.destination {
            return Err(ConventionError::configuration(
                format!("relocations[{index}]"),
                format!("`{}` is relocated onto itself", self.pattern),
            ));
        }
        Ok(())
    }
}
