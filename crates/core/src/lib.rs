//! # conventions-core
//!
//! Data model, error kinds and the Convention Applier.
//!
//! The applier turns an [`OrganizationProfile`], a [`BuildTargetSpec`] and any number of
//! [`PluginPublishDescriptor`]s into one [`ConventionDocument`] for the build orchestrator.

pub mod applier;
pub mod config;
pub mod description;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod license;
pub mod preset;
pub mod profile;
pub mod project;
pub mod relocation;
pub mod target;

// Re-export the public surface for convenience
pub use applier::{
    apply_conventions, apply_dependency_policy, apply_language_level, apply_license_header,
    apply_publishing_metadata, apply_shading,
};
pub use config::{CONFIG_DIR_NAME, CONFIG_FILE_NAMES, ConventionsConfig};
pub use description::{
    DescriptionGenerator, LoadOrder, MinecraftConfig, PaperConfig, PluginDependency,
    VelocityConfig,
};
pub use descriptor::PluginPublishDescriptor;
pub use document::{ConventionDocument, DocumentFormat};
pub use error::{ConventionError, Result};
pub use license::LicenseKind;
pub use preset::Preset;
pub use profile::{Developer, GithubRepo, OrganizationProfile};
pub use project::ProjectInfo;
pub use relocation::Relocation;
pub use target::{BuildTargetSpec, DependencyScope, DependencySpec};
