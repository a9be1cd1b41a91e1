use std::sync::LazyLock;

use async_trait::async_trait;
use conventions_core::description::{check_main_namespace, dedup_preserving_order};
use conventions_core::{ConventionError, DescriptionGenerator, LoadOrder, PaperConfig, ProjectInfo};
use regex::Regex;
use serde_yaml::{Mapping, Value};

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9 _.-]+$").expect("hardcoded regex must compile")
});

#[derive(Debug)]
pub struct PaperDescriptionGenerator {
    name: String,
    main: String,
    config: PaperConfig,
}

impl PaperDescriptionGenerator {
    /// Returns `None` unless both `name` and `main` are set and non-blank.
    #[must_use]
    pub fn from_config(config: &PaperConfig) -> Option<Self> {
        let name = config.name.as_deref().filter(|v| !v.trim().is_empty())?;
        let main = config.main.as_deref().filter(|v| !v.trim().is_empty())?;
        Some(Self {
            name: name.to_string(),
            main: main.to_string(),
            config: config.clone(),
        })
    }
}

fn load_order_name(load: LoadOrder) -> &'static str {
    match load {
        LoadOrder::Startup => "STARTUP",
        LoadOrder::Postworld => "POSTWORLD",
    }
}

fn sequence(items: Vec<String>) -> Value {
    Value::Sequence(items.into_iter().map(Value::String).collect())
}

#[async_trait]
impl DescriptionGenerator for PaperDescriptionGenerator {
    fn file_name(&self) -> &'static str {
        "plugin.yml"
    }

    fn validate(&self) -> Result<(), ConventionError> {
        check_main_namespace(&self.main)?;
        if !VALID_NAME.is_match(&self.name) {
            return Err(ConventionError::InvalidPluginDescription(format!(
                "Invalid plugin name, should match {}",
                VALID_NAME.as_str()
            )));
        }
        Ok(())
    }

    fn render(&self, project: &ProjectInfo) -> Result<String, ConventionError> {
        let mut node = Mapping::new();
        node.insert("name".into(), self.name.clone().into());
        node.insert("main".into(), self.main.clone().into());
        node.insert("version".into(), project.version.clone().into());
        if let Some(description) = project.description() {
            node.insert("description".into(), description.into());
        }
        node.insert("load".into(), load_order_name(self.config.load).into());
        if let Some(api_version) = &self.config.api_version {
            node.insert("api-version".into(), api_version.clone().into());
        }

        let authors = dedup_preserving_order(&self.config.authors);
        match authors.as_slice() {
            [] => {}
            [author] => {
                node.insert("author".into(), author.clone().into());
            }
            _ => {
                node.insert("authors".into(), sequence(authors));
            }
        }

        let (soft, hard): (Vec<_>, Vec<_>) = dedup_preserving_order(&self.config.dependencies)
            .into_iter()
            .partition(|dependency| dependency.optional);
        if !hard.is_empty() {
            node.insert(
                "depend".into(),
                sequence(hard.into_iter().map(|d| d.id).collect()),
            );
        }
        if !soft.is_empty() {
            node.insert(
                "softdepend".into(),
                sequence(soft.into_iter().map(|d| d.id).collect()),
            );
        }

        Ok(serde_yaml::to_string(&node)?)
    }
}
