use std::path::{Path, PathBuf};

use anyhow::Result;
use conventions_core::{ConventionError, DescriptionGenerator, MinecraftConfig, ProjectInfo};

use crate::{PaperDescriptionGenerator, VelocityDescriptionGenerator};

/// Where descriptions land, relative to the repository root.
pub const DESCRIPTION_OUTPUT_DIR: &str = "build/generated/conventions/minecraft-plugin-description";

/// Every generator whose required fields are present in `config`.
#[must_use]
pub fn get_generators(config: &MinecraftConfig) -> Vec<Box<dyn DescriptionGenerator>> {
    let mut generators: Vec<Box<dyn DescriptionGenerator>> = Vec::new();
    if let Some(paper) = PaperDescriptionGenerator::from_config(&config.paper) {
        generators.push(Box::new(paper));
    }
    if let Some(velocity) = VelocityDescriptionGenerator::from_config(&config.velocity) {
        generators.push(Box::new(velocity));
    }
    generators
}

/// # Errors
/// Returns the first validation failure.
pub fn validate_all(generators: &[Box<dyn DescriptionGenerator>]) -> Result<(), ConventionError> {
    generators.iter().try_for_each(|generator| generator.validate())
}

/// Validates every generator, then writes each description into `directory`.
///
/// # Errors
/// Returns error if any description is invalid (nothing is written then) or a write fails.
pub async fn generate_all(
    generators: &[Box<dyn DescriptionGenerator>],
    project: &ProjectInfo,
    directory: &Path,
) -> Result<Vec<PathBuf>> {
    validate_all(generators)?;
    let mut written = Vec::with_capacity(generators.len());
    for generator in generators {
        written.push(generator.generate(project, directory).await?);
    }
    Ok(written)
}
