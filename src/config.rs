use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Complete rehook configuration (loaded from TOML file)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RehookConfig {
    /// Project whose direnv cache is rebuilt (`~/` expands to the home directory)
    #[serde(default)]
    pub project_dir: Option<String>,

    #[serde(default)]
    pub direnv: DirenvConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

/// How the environment tool is invoked
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirenvConfig {
    /// Program name (looked up in PATH) or path
    #[serde(default = "default_program")]
    pub program: String,

    /// Variable that makes nix-direnv skip its freshness check
    #[serde(default = "default_force_reload_var")]
    pub force_reload_var: String,
}

impl Default for DirenvConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            force_reload_var: default_force_reload_var(),
        }
    }
}

/// Files whose timestamps mark the cache as fresh
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Environment config file, relative to the project
    #[serde(default = "default_envrc")]
    pub envrc: String,

    /// Cached hook files, relative to the project
    #[serde(default = "default_cache_glob")]
    pub glob: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            envrc: default_envrc(),
            glob: default_cache_glob(),
        }
    }
}

/// Project used when nothing else is configured
pub const DEFAULT_PROJECT_DIR: &str = "~/dotfiles";

fn default_program() -> String {
    "direnv".to_string()
}

fn default_force_reload_var() -> String {
    "_nix_direnv_force_reload".to_string()
}

fn default_envrc() -> String {
    ".envrc".to_string()
}

fn default_cache_glob() -> String {
    ".direnv/*.rc".to_string()
}

impl RehookConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: RehookConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: RehookConfig = toml::from_str("").unwrap();

        assert_eq!(config.project_dir, None);
        assert_eq!(config.direnv.program, "direnv");
        assert_eq!(config.direnv.force_reload_var, "_nix_direnv_force_reload");
        assert_eq!(config.cache.envrc, ".envrc");
        assert_eq!(config.cache.glob, ".direnv/*.rc");
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: RehookConfig = toml::from_str(
            r#"
project_dir = "/srv/project"

[direnv]
program = "/opt/bin/direnv"
"#,
        )
        .unwrap();

        assert_eq!(config.project_dir.as_deref(), Some("/srv/project"));
        assert_eq!(config.direnv.program, "/opt/bin/direnv");
        assert_eq!(config.direnv.force_reload_var, "_nix_direnv_force_reload");
        assert_eq!(config.cache.glob, ".direnv/*.rc");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<RehookConfig, _> = toml::from_str("projectdir = \"/tmp\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "project_dir = 3").unwrap();

        let err = RehookConfig::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }
}
