use std::sync::LazyLock;

use async_trait::async_trait;
use conventions_core::description::{check_main_namespace, dedup_preserving_order};
use conventions_core::{ConventionError, DescriptionGenerator, ProjectInfo, VelocityConfig};
use regex::Regex;
use serde_json::{Map, Value, json};

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_-]{0,63}$").expect("hardcoded regex must compile")
});

#[derive(Debug)]
pub struct VelocityDescriptionGenerator {
    id: String,
    name: String,
    main: String,
    config: VelocityConfig,
}

impl VelocityDescriptionGenerator {
    /// Returns `None` unless `id`, `name` and `main` are all set and non-blank.
    #[must_use]
    pub fn from_config(config: &VelocityConfig) -> Option<Self> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        };
        Some(Self {
            id: present(&config.id)?,
            name: present(&config.name)?,
            main: present(&config.main)?,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl DescriptionGenerator for VelocityDescriptionGenerator {
    fn file_name(&self) -> &'static str {
        "velocity-plugin.json"
    }

    fn validate(&self) -> Result<(), ConventionError> {
        if !ID_PATTERN.is_match(&self.id) {
            return Err(ConventionError::InvalidPluginDescription(format!(
                "Invalid plugin id, should match {}",
                ID_PATTERN.as_str()
            )));
        }
        check_main_namespace(&self.main)?;
        if self.config.version.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ConventionError::InvalidPluginDescription(
                "Version can't be empty if present".to_string(),
            ));
        }
        if self
            .config
            .description
            .as_deref()
            .is_some_and(|d| d.trim().is_empty())
        {
            return Err(ConventionError::InvalidPluginDescription(
                "Description can't be empty if present".to_string(),
            ));
        }
        Ok(())
    }

    fn render(&self, project: &ProjectInfo) -> Result<String, ConventionError> {
        let mut node = Map::new();
        node.insert("id".to_string(), json!(self.id));
        node.insert("name".to_string(), json!(self.name));
        node.insert("main".to_string(), json!(self.main));

        let version = self.config.version.as_deref().unwrap_or(&project.version);
        node.insert("version".to_string(), json!(version));

        let description = self
            .config
            .description
            .as_deref()
            .or_else(|| project.description());
        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            node.insert("description".to_string(), json!(description));
        }

        node.insert(
            "authors".to_string(),
            json!(dedup_preserving_order(&self.config.authors)),
        );
        let dependencies: Vec<Value> = dedup_preserving_order(&self.config.dependencies)
            .into_iter()
            .map(|dependency| json!({ "id": dependency.id, "optional": dependency.optional }))
            .collect();
        node.insert("dependencies".to_string(), Value::Array(dependencies));

        Ok(serde_json::to_string(&Value::Object(node))?)
    }
}
