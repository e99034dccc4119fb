/// Timestamp synchronization between `.envrc` and the cached hook files
///
/// direnv treats its cache as stale when `.envrc` is newer than the cached
/// `.direnv/*.rc` files. After a forced reload the config file is touched and
/// its timestamps are copied onto the cache, so both look equally fresh.
use glob::{glob_with, MatchOptions, Pattern};
use std::fs::{self, File, FileTimes, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, warn};

use crate::error::ReloadError;

/// Outcome of a timestamp synchronization
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Modification time now carried by the config file and every cache file
    pub modified: SystemTime,
    pub envrc: PathBuf,
    pub cache_files: Vec<PathBuf>,
}

/// Set the access and modification time of `path` to now
///
/// The file is created when missing. Returns the modification time as stored
/// by the filesystem, which may be coarser than the system clock.
pub fn touch(path: &Path) -> Result<SystemTime, ReloadError> {
    let to_err = |source| ReloadError::Timestamp {
        path: path.to_path_buf(),
        source,
    };

    // Setting explicit times needs ownership, not write access
    let file = if path.exists() {
        File::open(path)
    } else {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
    }
    .map_err(to_err)?;

    let now = SystemTime::now();
    file.set_times(FileTimes::new().set_accessed(now).set_modified(now))
        .map_err(to_err)?;

    let modified = file
        .metadata()
        .and_then(|m| m.modified())
        .map_err(to_err)?;

    debug!(operation = "touch", path = %path.display(), "timestamp updated");
    Ok(modified)
}

/// Expand `pattern` relative to `base_dir`, keeping regular files only
///
/// Wildcards do not match a leading dot, as in a shell.
pub fn expand_cache_glob(base_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, ReloadError> {
    let full_pattern = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        let base = Pattern::escape(&base_dir.to_string_lossy());
        Path::new(&base).join(pattern).to_string_lossy().to_string()
    };

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let entries = glob_with(&full_pattern, options).map_err(|source| ReloadError::InvalidGlob {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ReloadError::Timestamp {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;

        if path.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Copy the access and modification times of `reference` onto `targets`
pub fn copy_times(reference: &Path, targets: &[PathBuf]) -> Result<SystemTime, ReloadError> {
    let metadata = fs::metadata(reference).map_err(|source| ReloadError::Timestamp {
        path: reference.to_path_buf(),
        source,
    })?;

    let to_ref_err = |source| ReloadError::Timestamp {
        path: reference.to_path_buf(),
        source,
    };
    let modified = metadata.modified().map_err(to_ref_err)?;
    let accessed = metadata.accessed().unwrap_or(modified);
    let times = FileTimes::new()
        .set_accessed(accessed)
        .set_modified(modified);

    for target in targets {
        File::open(target)
            .and_then(|file| file.set_times(times))
            .map_err(|source| ReloadError::Timestamp {
                path: target.clone(),
                source,
            })?;

        debug!(operation = "copy_times", path = %target.display(), "timestamp copied");
    }

    Ok(modified)
}

/// Touch the config file, then give every cache file its new timestamps
pub fn sync(project_dir: &Path, envrc: &Path, cache_glob: &str) -> Result<SyncReport, ReloadError> {
    let envrc = project_dir.join(envrc);
    touch(&envrc)?;

    let cache_files = expand_cache_glob(project_dir, cache_glob)?;
    if cache_files.is_empty() {
        warn!(
            operation = "sync",
            pattern = cache_glob,
            path = %project_dir.display(),
            "no cached hook files matched"
        );
    }

    let modified = copy_times(&envrc, &cache_files)?;

    info!(
        operation = "sync",
        status = "success",
        file_count = cache_files.len(),
        "cache marked fresh"
    );

    Ok(SyncReport {
        modified,
        envrc,
        cache_files,
    })
}
