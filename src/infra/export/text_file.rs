use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::UserDirs;

use crate::usecase::services::export_service::ExportArtifact;

pub fn write_export(artifact: &ExportArtifact, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create export dir: {}", parent.display()))?;
    }
    std::fs::write(path, artifact.contents.as_bytes())
        .with_context(|| format!("failed to write export: {}", path.display()))?;
    Ok(())
}

/// Where the save dialog opens: the download folder, else the home folder.
pub fn default_export_dir() -> Option<PathBuf> {
    let dirs = UserDirs::new()?;
    Some(
        dirs.download_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dirs.home_dir().to_path_buf()),
    )
}
