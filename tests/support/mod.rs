//! Test support utilities for sealenv integration tests.
//!
//! Provides isolated test environments and a mock GitHub API.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod github;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use github::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Write a .env file into the project dir and return its path.
    pub fn write_env(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join(".env");
        std::fs::write(&path, contents).expect("failed to write .env");
        path
    }

    /// Write a `.sealenv.toml` into the project dir.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join(".sealenv.toml");
        std::fs::write(&path, contents).expect("failed to write config");
        path
    }
}
