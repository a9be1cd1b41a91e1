use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gix::discover;

/// Find the working directory of the git repository containing `current_dir`
pub fn find_repo_root(current_dir: &Path) -> Result<PathBuf> {
    let repo = discover(current_dir)?;
    let root = repo
        .workdir()
        .context("Not a git working directory. Ensure you are inside a git repository.")?
        .to_path_buf();
    Ok(root)
}
