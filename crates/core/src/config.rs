use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::applier::{apply_license_header, assemble};
use crate::descriptor::PluginPublishDescriptor;
use crate::description::MinecraftConfig;
use crate::document::ConventionDocument;
use crate::error::{ConventionError, Result};
use crate::preset::Preset;
use crate::profile::OrganizationProfile;
use crate::project::ProjectInfo;
use crate::relocation::Relocation;
use crate::target::BuildTargetSpec;

/// Directory at the repository root holding the config file.
pub const CONFIG_DIR_NAME: &str = ".conventions";

/// Config file names looked up inside [`CONFIG_DIR_NAME`], in priority order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["config.yaml", "config.yml", "config.json"];

/// Loaded from `.conventions/config.yaml` (or `.yml`/`.json`).
///
/// Holds every record the applier needs plus the optional shading and plugin description
/// settings. The build target comes from `target`, from `preset`, or from `preset`
/// overriding the level of `target`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConventionsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectInfo>,

    pub organization: OrganizationProfile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<BuildTargetSpec>,

    #[serde(default)]
    pub plugins: Vec<PluginPublishDescriptor>,

    #[serde(default)]
    pub relocations: Vec<Relocation>,

    #[serde(default)]
    pub minecraft: MinecraftConfig,
}

impl ConventionsConfig {
    /// # Errors
    /// Returns error if `content` is not a valid YAML config.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// # Errors
    /// Returns error if `content` is not a valid JSON config.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses by file extension: `.json` is JSON, anything else YAML.
    ///
    /// # Errors
    /// Returns error if `content` does not parse.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(content),
            _ => Self::from_yaml_str(content),
        }
    }

    /// Anchors relative paths (the license file) at `base`.
    #[must_use]
    pub fn with_base_dir(mut self, base: &Path) -> Self {
        self.organization = self.organization.with_license_base(base);
        self
    }

    /// Resolves the effective build target, with `preset` taking precedence over the
    /// preset written in the file.
    ///
    /// # Errors
    /// Returns a configuration error when neither a target nor a preset is given.
    pub fn target_spec(&self, preset: Option<Preset>) -> Result<BuildTargetSpec> {
        match (preset.or(self.preset), &self.target) {
            (Some(preset), Some(target)) => Ok(preset.override_target(target)),
            (Some(preset), None) => Ok(preset.target_spec(Vec::new())),
            (None, Some(target)) => Ok(target.clone()),
            (None, None) => Err(ConventionError::configuration(
                "target",
                "either `target` or `preset` must be set",
            )),
        }
    }

    /// Runs the applier over this config. The license is read before the target is
    /// resolved.
    ///
    /// # Errors
    /// Returns the first error of any applier step, or a configuration error for an
    /// incomplete project section.
    pub fn apply(&self, preset: Option<Preset>) -> Result<ConventionDocument> {
        let license = apply_license_header(&self.organization)?;
        let target = self.target_spec(preset)?;
        let document = assemble(
            license,
            &self.organization,
            &target,
            &self.plugins,
            &self.relocations,
        )?;
        match &self.project {
            Some(project) => {
                project.validate()?;
                Ok(document.with_project(project.clone()))
            }
            None => Ok(document),
        }
    }
}
