// Common test utilities shared across acceptance tests
//
// Each test gets its own project directory, fake direnv and XDG config home
// inside one temp dir, so nothing on the host (a real direnv, a user config
// in ~/.config/rehook) is ever touched.

use assert_cmd::Command;
use std::fs::{self, File};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

/// Timestamp given to every project file before a run
pub const OLD_MTIME_SECS: u64 = 1_000_000;

/// Fake direnv: records its arguments and the force flag, exits with
/// $FAKE_DIRENV_EXIT (default 0)
const FAKE_DIRENV: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$FAKE_DIRENV_LOG"
printf 'force=%s\n' "$_nix_direnv_force_reload" >> "$FAKE_DIRENV_LOG"
exit "${FAKE_DIRENV_EXIT:-0}"
"#;

pub struct TestProject {
    temp_dir: TempDir,
    pub project_dir: PathBuf,
    pub direnv: PathBuf,
    pub log: PathBuf,
}

impl TestProject {
    /// Project with an `.envrc` and the given cached hook files, all backdated
    pub fn new(cache_files: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let project_dir = temp_dir.path().join("project");
        fs::create_dir_all(project_dir.join(".direnv")).unwrap();

        fs::write(project_dir.join(".envrc"), "use flake\n").unwrap();
        backdate(&project_dir.join(".envrc"));
        for name in cache_files {
            let path = project_dir.join(".direnv").join(name);
            fs::write(&path, "export PATH=/nix/store/bin\n").unwrap();
            backdate(&path);
        }

        let bin_dir = temp_dir.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let direnv = bin_dir.join("direnv");
        fs::write(&direnv, FAKE_DIRENV).unwrap();
        fs::set_permissions(&direnv, fs::Permissions::from_mode(0o755)).unwrap();

        let log = temp_dir.path().join("direnv.log");

        Self {
            temp_dir,
            project_dir,
            direnv,
            log,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// rehook command pointed at this project, with a clean environment
    pub fn rehook(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rehook"));
        cmd.env_remove("RUST_LOG")
            .env_remove("REHOOK_CONFIG")
            .env_remove("_nix_direnv_force_reload")
            .env("XDG_CONFIG_HOME", self.root().join("config"))
            .env("REHOOK_PROJECT_DIR", &self.project_dir)
            .env("REHOOK_DIRENV", &self.direnv)
            .env("FAKE_DIRENV_LOG", &self.log);
        cmd
    }

    pub fn envrc(&self) -> PathBuf {
        self.project_dir.join(".envrc")
    }

    pub fn cache_file(&self, name: &str) -> PathBuf {
        self.project_dir.join(".direnv").join(name)
    }

    /// Lines written by the fake direnv, None if it never ran
    pub fn direnv_log(&self) -> Option<Vec<String>> {
        fs::read_to_string(&self.log)
            .ok()
            .map(|s| s.lines().map(String::from).collect())
    }
}

pub fn old_mtime() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(OLD_MTIME_SECS)
}

pub fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

fn backdate(path: &Path) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(old_mtime())
        .unwrap();
}
