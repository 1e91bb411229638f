//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Environment variables that would leak host settings into a test run.
const HOST_VARS: &[&str] = &[
    "SEALENV_TOKEN",
    "GITHUB_TOKEN",
    "SEALENV_CONFIG",
    "SEALENV_CONCURRENCY",
    "SEALENV_TIMEOUT",
    "SEALENV_RETRIES",
    "SEALENV_API_URL",
    "SEALENV_LOG",
];

impl Test {
    /// Create a sealenv command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    /// - NO_COLOR set and host sealenv/GitHub variables removed
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sealenv").expect("failed to find sealenv binary");
        for var in HOST_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// `sealenv push <resource> --file .env --token test-token --api-url <url> --json`
    pub fn push_cmd(&self, resource: &str, api_url: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.args([
            "push",
            resource,
            "--file",
            ".env",
            "--token",
            "test-token",
            "--retries",
            "0",
            "--api-url",
            api_url,
            "--json",
        ]);
        cmd
    }

    /// Run `push_cmd` off the async runtime so the mock server keeps serving.
    pub async fn push(&self, resource: &str, api_url: &str) -> Output {
        let mut cmd = self.push_cmd(resource, api_url);
        tokio::task::spawn_blocking(move || cmd.output().expect("failed to run sealenv push"))
            .await
            .expect("push task panicked")
    }

    /// Shortcut for `sealenv parse --file .env`.
    pub fn parse(&self) -> Output {
        self.cmd()
            .args(["parse", "--file", ".env"])
            .output()
            .expect("failed to run sealenv parse")
    }
}
