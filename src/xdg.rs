//! XDG Base Directory support for rehook
//!
//! Follows the XDG Base Directory Specification:
//! - https://specifications.freedesktop.org/basedir-spec/basedir-spec-latest.html
//!
//! Only the configuration directory is used:
//! - `$XDG_CONFIG_HOME/rehook/` (default: `~/.config/rehook/`)

use std::path::PathBuf;

/// Get the rehook configuration directory
///
/// Respects XDG_CONFIG_HOME environment variable.
/// Falls back to `$HOME/.config/rehook`, as direnv itself does on every platform.
pub fn config_dir() -> PathBuf {
    if let Some(xdg_config) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        PathBuf::from(xdg_config).join("rehook")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config").join("rehook")
    } else {
        PathBuf::from(".rehook-config")
    }
}

/// Default location of the configuration file
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}
