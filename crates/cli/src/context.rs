use anyhow::Result;
use conventions_core::ConventionsConfig;
use conventions_utils::{find_repo_root, get_config_path, load_config};
use std::path::{Path, PathBuf};

/// Everything a command needs after config discovery.
pub struct CommandContext {
    /// Repository root, or the current directory outside a repository
    pub base_dir: PathBuf,
    pub config_path: PathBuf,
    pub config: ConventionsConfig,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the config cannot be found, read or parsed.
    pub async fn new(config: Option<&Path>) -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let base_dir = find_repo_root(&current_dir).unwrap_or_else(|_| current_dir.clone());
        let config_path = get_config_path(&current_dir, config)?;
        let config = load_config(&config_path).await?;

        Ok(Self {
            base_dir,
            config_path,
            config,
        })
    }

    /// `out` when given, otherwise `default` under the base directory.
    #[must_use]
    pub fn output_dir(&self, out: Option<&Path>, default: &str) -> PathBuf {
        out.map_or_else(|| self.base_dir.join(default), Path::to_path_buf)
    }
}
