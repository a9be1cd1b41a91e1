use std::path::{Path, PathBuf};

use anyhow::Result;
use conventions_core::CONFIG_DIR_NAME;

use crate::find_repo_root;

/// `.conventions` directory at the root of the repository containing `current_dir`
pub fn get_conventions_dir(current_dir: &Path) -> Result<PathBuf> {
    Ok(find_repo_root(current_dir)?.join(CONFIG_DIR_NAME))
}
