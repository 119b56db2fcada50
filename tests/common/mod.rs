// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides temporary template workspaces and the binary under test

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Exit status observed by the parent for `exit(-1)`
#[cfg(unix)]
pub const USAGE_STATUS: i32 = 255;
#[cfg(not(unix))]
pub const USAGE_STATUS: i32 = -1;

/// Exit status observed by the parent for `exit(-2)`
#[cfg(unix)]
pub const HELP_STATUS: i32 = 254;
#[cfg(not(unix))]
pub const HELP_STATUS: i32 = -2;

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn create_template(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write template");
        path
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    pub fn read_output(&self, name: &str) -> Vec<u8> {
        fs::read(self.output_file(name)).expect("Failed to read output")
    }

    /// The binary under test, running inside the temp directory
    pub fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("template-cli");
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        cmd
    }
}
