/// Configuration merger: CLI args > Env vars > Config file > Defaults
///
/// This module handles merging configuration from multiple sources:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{RehookConfig, DEFAULT_PROJECT_DIR};

/// Settings for one reload run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadSettings {
    pub project_dir: PathBuf,
    pub direnv: String,
    pub force_reload_var: String,
    pub envrc: PathBuf,
    pub cache_glob: String,
}

impl ReloadSettings {
    /// Merge configuration from CLI args and config file
    /// Precedence: CLI > env (already handled by clap) > config file > defaults
    pub fn merge(args: &Cli, file_config: Option<RehookConfig>) -> Self {
        let file = file_config.unwrap_or_default();

        let project_dir = args
            .project_dir
            .clone()
            .or(file.project_dir)
            .unwrap_or_else(|| DEFAULT_PROJECT_DIR.to_string());

        Self {
            project_dir: expand_home(&project_dir),
            direnv: args.direnv.clone().unwrap_or(file.direnv.program),
            force_reload_var: file.direnv.force_reload_var,
            envrc: PathBuf::from(file.cache.envrc),
            cache_glob: file.cache.glob,
        }
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => Path::new(path).to_path_buf(),
    }
}
