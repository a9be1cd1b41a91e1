use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use conventions_core::{CONFIG_DIR_NAME, CONFIG_FILE_NAMES, ConventionsConfig};
use tokio::fs::read_to_string;

use crate::get_conventions_dir;

/// First existing config file inside `conventions_dir`, by [`CONFIG_FILE_NAMES`] priority
#[must_use]
pub fn find_config_file(conventions_dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| conventions_dir.join(name))
        .find(|path| path.is_file())
}

/// Directory relative paths in `config_path` are resolved against: the repository root
/// for files inside `.conventions/`, the file's own directory otherwise.
fn base_dir(config_path: &Path) -> PathBuf {
    let parent = config_path.parent().unwrap_or_else(|| Path::new("."));
    if parent.file_name().is_some_and(|name| name == CONFIG_DIR_NAME) {
        parent.parent().unwrap_or(parent).to_path_buf()
    } else {
        parent.to_path_buf()
    }
}

/// Read and parse one config file.
pub async fn load_config(config_path: &Path) -> Result<ConventionsConfig> {
    let content = read_to_string(config_path)
        .await
        .with_context(|| format!("Failed to read config {}", config_path.display()))?;
    let config = ConventionsConfig::parse(config_path, &content)
        .with_context(|| format!("Failed to parse config {}", config_path.display()))?;
    Ok(config.with_base_dir(&base_dir(config_path)))
}

/// Locate the config file: `explicit` when given, otherwise discovered under the
/// repository's `.conventions` directory.
pub fn get_config_path(current_dir: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(if path.is_relative() {
            current_dir.join(path)
        } else {
            path.to_path_buf()
        });
    }
    let conventions_dir = get_conventions_dir(current_dir)?;
    find_config_file(&conventions_dir).with_context(|| {
        format!(
            "No config found in {}. Run `conventions init` first.",
            conventions_dir.display()
        )
    })
}

/// Locate and load the config.
pub async fn get_conventions_config(
    current_dir: &Path,
    explicit: Option<&Path>,
) -> Result<ConventionsConfig> {
    let path = get_config_path(current_dir, explicit)?;
    load_config(&path).await
}
