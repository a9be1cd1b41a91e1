use std::path::{Path, PathBuf};

use anyhow::Result;
use conventions_core::{ConventionDocument, DocumentFormat};
use tokio::fs::{create_dir_all, write};

/// Where documents land, relative to the repository root.
pub const DOCUMENT_OUTPUT_DIR: &str = "build/conventions";

/// Render `document` and write it to `<out_dir>/<format file name>`.
///
/// Rendering happens before the directory is touched, so a failed render leaves nothing
/// behind.
pub async fn write_document(
    document: &ConventionDocument,
    format: DocumentFormat,
    out_dir: &Path,
) -> Result<PathBuf> {
    let content = document.render(format)?;
    create_dir_all(out_dir).await?;
    let path = out_dir.join(format.file_name());
    write(&path, content).await?;
    Ok(path)
}
