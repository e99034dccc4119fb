use tracing::info;

use crate::error::ReloadError;
use crate::hook::{ensure_project_dir, timestamps, ForcedReload, SyncReport};
use crate::merger::ReloadSettings;

/// Rebuild the cached hook, then mark the cache fresh
///
/// Steps run in order and the first failure stops the run: a failed reload
/// leaves every timestamp untouched.
pub fn run(settings: &ReloadSettings) -> Result<SyncReport, ReloadError> {
    info!(
        operation = "reload",
        path = %settings.project_dir.display(),
        "rebuilding direnv cache"
    );

    ensure_project_dir(&settings.project_dir)?;

    ForcedReload::new(
        &settings.direnv,
        &settings.project_dir,
        &settings.force_reload_var,
    )
    .run()?;

    timestamps::sync(
        &settings.project_dir,
        &settings.envrc,
        &settings.cache_glob,
    )
}
