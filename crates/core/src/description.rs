use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs::{create_dir_all, write};

use crate::error::ConventionError;
use crate::project::ProjectInfo;

/// Package prefixes a server plugin's main class may not live under.
pub const INVALID_NAMESPACES: [&str; 4] = [
    "net.minecraft.",
    "org.bukkit.",
    "io.papermc.paper.",
    "com.destroystokoyo.paper.",
];

/// Another server plugin this one depends on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PluginDependency {
    pub id: String,
    #[serde(default)]
    pub optional: bool,
}

impl PluginDependency {
    pub fn required(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            optional: false,
        }
    }

    pub fn optional(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            optional: true,
        }
    }
}

/// When Paper loads the plugin.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadOrder {
    Startup,
    #[default]
    Postworld,
}

/// Paper `plugin.yml` settings. A description is generated only when `name` and `main`
/// are both set.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaperConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub load: LoadOrder,
    #[serde(default)]
    pub dependencies: Vec<PluginDependency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

/// Velocity `velocity-plugin.json` settings. A description is generated only when `id`,
/// `name` and `main` are all set.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VelocityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Overrides the project version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Overrides the project description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<PluginDependency>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MinecraftConfig {
    #[serde(default)]
    pub paper: PaperConfig,
    #[serde(default)]
    pub velocity: VelocityConfig,
}

/// Rejects main classes under a server's own packages (case-insensitive).
///
/// # Errors
/// Returns `InvalidPluginDescription` naming the offending namespace.
pub fn check_main_namespace(main: &str) -> Result<(), ConventionError> {
    let main = main.to_lowercase();
    match INVALID_NAMESPACES
        .iter()
        .find(|namespace| main.starts_with(*namespace))
    {
        Some(namespace) => Err(ConventionError::InvalidPluginDescription(format!(
            "{main} may not be within the {namespace} namespace"
        ))),
        None => Ok(()),
    }
}

/// Order-preserving de-duplication for author and dependency lists.
#[must_use]
pub fn dedup_preserving_order<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Produces one server plugin description file.
#[async_trait]
pub trait DescriptionGenerator: std::fmt::Debug + Send + Sync {
    /// Name of the file written into the output directory
    fn file_name(&self) -> &'static str;

    /// # Errors
    /// Returns `InvalidPluginDescription` when the server would reject the result.
    fn validate(&self) -> Result<(), ConventionError>;

    /// # Errors
    /// Returns error if the description cannot be serialized.
    fn render(&self, project: &ProjectInfo) -> Result<String, ConventionError>;

    /// Render and write `<directory>/<file_name>`, returning the written path.
    async fn generate(&self, project: &ProjectInfo, directory: &Path) -> Result<PathBuf> {
        let content = self.render(project)?;
        create_dir_all(directory).await?;
        let path = directory.join(self.file_name());
        write(&path, content).await?;
        Ok(path)
    }
}
