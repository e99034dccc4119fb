// Library interface for rehook
// This allows integration tests and external code to use rehook's modules

pub mod cli;
pub mod cli_utils;
pub mod commands;
pub mod config;
pub mod config_discovery;
pub mod error;
pub mod hook;
pub mod logging;
pub mod merger;
pub mod xdg;

// Re-export commonly used types
pub use config::RehookConfig;
pub use error::ReloadError;
pub use hook::{ForcedReload, SyncReport};
pub use merger::ReloadSettings;
