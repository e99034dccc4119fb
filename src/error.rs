use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status used by shells when a command cannot be found
pub const EXIT_TOOL_UNAVAILABLE: i32 = 127;

/// Failures that abort a reload
///
/// Every variant is terminal: the reload stops at the step that produced it.
#[derive(Error, Debug)]
pub enum ReloadError {
    #[error("Project directory not found: {}", .0.display())]
    MissingProjectDir(PathBuf),

    #[error("Could not run '{program}': {reason}")]
    ToolUnavailable { program: String, reason: String },

    #[error("Forced reload failed with exit code: {code}")]
    ReloadFailed { code: i32 },

    #[error("Failed to update timestamp of {}: {source}", .path.display())]
    Timestamp {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid cache glob '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error(transparent)]
    Config(#[from] anyhow::Error),
}

impl ReloadError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ReloadError::ToolUnavailable { .. } => EXIT_TOOL_UNAVAILABLE,
            ReloadError::ReloadFailed { code } => *code,
            _ => 1,
        }
    }

    /// Lines reported to the user on stderr
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            ReloadError::MissingProjectDir(path) => vec![
                format!("Project directory not found: {}", path.display()),
                "The direnv cache can only be rebuilt for an existing project.".to_string(),
                "Set project_dir in the rehook config or pass --project-dir.".to_string(),
            ],
            ReloadError::Config(err) => vec![format!("{:#}", err)],
            _ => vec![self.to_string()],
        }
    }
}
