//! Common test utilities for Sidekick CLI tests.
//!
//! Provides `TestEnv`: an isolated project directory and HOME, plus helpers
//! to write settings and records and to run the binary against them.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the sidekick binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Minimal settings for a host at a documentation address
pub const SETTINGS_YAML: &str = "\
serverAddress: 203.0.113.7
remoteUser: sidekick
dockerUsername: alice
publicDomain: example.com
";

/// Record of a launched app with two previews
pub const RECORD_YAML: &str = "\
name: shop
image: alice/shop
port: 3000
url: shop.example.com
createdAt: Fri Oct  2 09:30:00 UTC 2026
lastDeployedAt: Fri Oct 16 09:30:00 UTC 2026
previewEnvironments:
  abc1234:
    url: https://abc1234.shop.example.com
    image: shop:abc1234
    createdAt: Mon Oct 12 08:00:00 UTC 2026
  f00d:
    url: https://f00d.shop.example.com
    image: shop:f00d
    createdAt: Tue Oct 13 18:45:10 UTC 2026
";

/// Isolated project and home directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            home_dir: TempDir::new().expect("create home dir"),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Where `sidekick init` writes unless `--config` says otherwise
    pub fn settings_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("sidekick")
            .join("sidekick.yml")
    }

    pub fn write_settings(&self, yaml: &str) -> &Self {
        let path = self.settings_path();
        fs::create_dir_all(path.parent().expect("settings dir")).expect("create settings dir");
        fs::write(path, yaml).expect("write settings");
        self
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> &Self {
        fs::write(self.project_path(relative), content).expect("write project file");
        self
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = sidekick_command(self.home_dir.path());
        cmd.current_dir(self.project_root.path()).args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("failed to execute sidekick"))
    }
}

/// The binary with HOME isolated and terminal features off
pub fn sidekick_command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sidekick"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env_remove("RUST_LOG")
        .env_remove("GITHUB_ACTIONS")
        .env_remove("SIDEKICK_SERVER_ADDRESS")
        .env_remove("SIDEKICK_REMOTE_USER")
        .env_remove("SIDEKICK_DOCKER_USERNAME")
        .env_remove("SIDEKICK_PUBLIC_DOMAIN");
    cmd
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
