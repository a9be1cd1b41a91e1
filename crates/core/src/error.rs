use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ConventionError> = std::result::Result<T, E>;

/// Every failure the applier can surface. All of them are fatal for the current run.
#[derive(Debug, Error)]
pub enum ConventionError {
    /// A required field is missing, blank or malformed
    #[error("invalid configuration `{field}`: {reason}")]
    Configuration { field: String, reason: String },

    /// A file the conventions depend on could not be read
    #[error("resource not found: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two publish descriptors declare the same plugin id
    #[error("duplicate plugin id `{0}`")]
    DuplicatePluginId(String),

    /// A generated plugin description would be rejected by the server
    #[error("invalid plugin description: {0}")]
    InvalidPluginDescription(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ConventionError {
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Fails with a configuration error when `value` is empty or whitespace only.
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConventionError::configuration(field, "must not be blank"));
    }
    Ok(())
}
