use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConventionError, Result, require};

static PLUGIN_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*$").expect("hardcoded regex must compile")
});

static CLASS_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
        .expect("hardcoded regex must compile")
});

/// Plugin-portal metadata for one publishable plugin artifact.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PluginPublishDescriptor {
    /// Reverse-domain id, e.g. `com.acme.conventions`
    pub id: String,
    pub name: String,
    pub description: String,
    /// Fully qualified class implementing the plugin
    pub implementation_class: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl PluginPublishDescriptor {
    /// # Errors
    /// Returns a configuration error for the first blank or malformed field.
    pub fn validate(&self, index: usize) -> Result<()> {
        let field = |name: &str| format!("plugins[{index}].{name}");
        require(&field("id"), &self.id)?;
        require(&field("name"), &self.name)?;
        require(&field("description"), &self.description)?;
        require(&field("implementationClass"), &self.implementation_class)?;
        if !PLUGIN_ID_PATTERN.is_match(&self.id) {
            return Err(ConventionError::configuration(
                field("id"),
                format!("`{}` is not a valid plugin id", self.id),
            ));
        }
        if !CLASS_NAME_PATTERN.is_match(&self.implementation_class) {
            return Err(ConventionError::configuration(
                field("implementationClass"),
                format!("`{}` is not a class name", self.implementation_class),
            ));
        }
        if self.tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(ConventionError::configuration(
                field("tags"),
                "tags must not be blank",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn descriptor(id: &str, class: &str) -> PluginPublishDescriptor {
        PluginPublishDescriptor {
            id: id.to_string(),
            name: "Strawberry".to_string(),
            description: "A gradle plugin to apply common organization build settings."
                .to_string(),
            implementation_class: class.to_string(),
            tags: ["java", "minecraft", "boilerplate"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    #[rstest]
    #[case("strawberry", true)]
    #[case("com.vouncherstudios.strawberry", true)]
    #[case("com.acme.conv-java_8", true)]
    #[case("com..acme", false)]
    #[case(".com.acme", false)]
    #[case("com.acme.", false)]
    #[case("com acme", false)]
    fn test_plugin_id(#[case] id: &str, #[case] valid: bool) {
        let result = descriptor(id, "com.vouncherstudios.strawberry.StrawberryPlugin").validate(0);
        assert_eq!(result.is_ok(), valid);
    }

    #[rstest]
    #[case("com.vouncherstudios.strawberry.StrawberryPlugin", true)]
    #[case("Plugin", true)]
    #[case("com.acme.Outer$Inner", true)]
    #[case("com.acme.1Plugin", false)]
    #[case("com.acme.", false)]
    fn test_implementation_class(#[case] class: &str, #[case] valid: bool) {
        assert_eq!(descriptor("com.acme.conv", class).validate(0).is_ok(), valid);
    }

    #[test]
    fn test_blank_tag_is_rejected() {
        let mut descriptor = descriptor("com.acme.conv", "com.acme.Conv");
        descriptor.tags.insert(" ".to_string());
        assert!(matches!(
            descriptor.validate(2),
            Err(ConventionError::Configuration { field, .. }) if field == "plugins[2].tags"
        ));
    }

    #[test]
    fn test_tags_ignore_insertion_order() {
        let json_a = r#"{"id":"a","name":"A","description":"d","implementationClass":"A","tags":["z","a"]}"#;
        let json_b = r#"{"id":"a","name":"A","description":"d","implementationClass":"A","tags":["a","z"]}"#;
        let a: PluginPublishDescriptor = serde_json::from_str(json_a).unwrap();
        let b: PluginPublishDescriptor = serde_json::from_str(json_b).unwrap();
        assert_eq!(a, b);
    }
}
