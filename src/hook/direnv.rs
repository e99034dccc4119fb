/// Forced reload of the cached direnv hook
///
/// Runs `direnv exec <project> true` with the nix-direnv force flag set, so the
/// environment is re-evaluated even though the cache looks fresh.
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

use crate::error::ReloadError;

/// Value the force flag is set to
pub const FORCE_RELOAD_VALUE: &str = "1";

/// No-op payload executed inside the project environment
pub const NOOP_COMMAND: &str = "true";

/// One forced reload of a project's environment
#[derive(Debug, Clone)]
pub struct ForcedReload {
    pub program: String,
    pub project_dir: PathBuf,
    pub force_var: String,
}

impl ForcedReload {
    pub fn new(program: &str, project_dir: &Path, force_var: &str) -> Self {
        Self {
            program: program.to_string(),
            project_dir: project_dir.to_path_buf(),
            force_var: force_var.to_string(),
        }
    }

    /// Resolve the environment tool
    ///
    /// Bare names are looked up in PATH, anything containing a separator is
    /// used as given.
    pub fn resolve_program(&self) -> Result<PathBuf, ReloadError> {
        let candidate = Path::new(&self.program);
        if candidate.components().count() > 1 {
            return Ok(candidate.to_path_buf());
        }

        which::which(&self.program).map_err(|e| ReloadError::ToolUnavailable {
            program: self.program.clone(),
            reason: e.to_string(),
        })
    }

    /// Build the reload command for an already resolved program
    pub fn command(&self, program: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.arg("exec")
            .arg(&self.project_dir)
            .arg(NOOP_COMMAND)
            .env(&self.force_var, FORCE_RELOAD_VALUE)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Run the reload, failing with the child's exit status
    pub fn run(&self) -> Result<(), ReloadError> {
        let program = self.resolve_program()?;

        info!(
            operation = "reload",
            program = %program.display(),
            path = %self.project_dir.display(),
            "forcing direnv reload"
        );

        let status = self
            .command(&program)
            .status()
            .map_err(|e| ReloadError::ToolUnavailable {
                program: program.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(operation = "reload", %status, "reload command finished");

        if status.success() {
            info!(operation = "reload", status = "success", "direnv cache rebuilt");
            Ok(())
        } else {
            Err(ReloadError::ReloadFailed {
                code: exit_code(status),
            })
        }
    }
}

/// Exit code a shell would report for `status`
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
