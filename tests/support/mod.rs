use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway board: every test gets its own data directory, and every
/// command invocation is a fresh process pointed at it.
pub struct TestBoard {
    dir: TempDir,
}

impl TestBoard {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the file backing the persisted snapshot key.
    pub fn store_file(&self) -> PathBuf {
        self.dir.path().join("todo-app-v1")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("crew").expect("binary");
        cmd.env("CREW_DATA_DIR", self.dir.path());
        cmd
    }

    /// Run a command that is expected to succeed and return its stdout.
    pub fn run(&self, args: &[&str]) -> String {
        let assert = self.cmd().args(args).assert().success();
        String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
    }
}
