use std::path::Path;
use tracing::debug;

use crate::error::ReloadError;

/// Fails unless `path` is an existing directory
pub fn ensure_project_dir(path: &Path) -> Result<(), ReloadError> {
    if !path.is_dir() {
        return Err(ReloadError::MissingProjectDir(path.to_path_buf()));
    }

    debug!(operation = "check", path = %path.display(), "project directory exists");
    Ok(())
}
