//! Git version control
//!
//! Asks the `git` binary for working tree state and the current revision.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{VcsError, VersionControl};
use crate::domain::value_objects::RevisionHash;

/// Version control backed by the `git` command
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
        }
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    fn git(&self, root: &Path, args: &[&str]) -> Result<String, VcsError> {
        let output = Command::new(&self.program)
            .arg("-C")
            .arg(root)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| VcsError::Unavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(VcsError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl VersionControl for GitCli {
    /// Clean means no staged, unstaged, or untracked changes
    fn is_clean(&self, root: &Path) -> Result<bool, VcsError> {
        let status = self.git(root, &["status", "--porcelain"])?;
        Ok(status.trim().is_empty())
    }

    fn short_revision(&self, root: &Path) -> Result<RevisionHash, VcsError> {
        let rev = self.git(root, &["rev-parse", "--short", "HEAD"])?;
        RevisionHash::parse(rev.trim()).map_err(|e| VcsError::InvalidRevision(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn init_repo(root: &Path) {
        for args in [
            vec!["init", "-q"],
            vec!["config", "user.email", "dev@example.com"],
            vec!["config", "user.name", "Dev"],
            vec!["config", "commit.gpgsign", "false"],
        ] {
            let status = Command::new("git")
                .arg("-C")
                .arg(root)
                .args(&args)
                .status()
                .unwrap();
            assert!(status.success());
        }
    }

    fn commit_all(root: &Path) {
        for args in [vec!["add", "."], vec!["commit", "-q", "-m", "init"]] {
            let status = Command::new("git")
                .arg("-C")
                .arg(root)
                .args(&args)
                .status()
                .unwrap();
            assert!(status.success());
        }
    }

    #[test]
    fn clean_repository_reports_revision() {
        if !git_available() {
            return;
        }
        let dir = tempdir().unwrap();
        init_repo(dir.path());
        fs::write(dir.path().join("Dockerfile"), "FROM scratch\n").unwrap();
        commit_all(dir.path());

        let git = GitCli::new();

        assert!(git.is_clean(dir.path()).unwrap());
        let rev = git.short_revision(dir.path()).unwrap();
        assert!(rev.as_str().len() >= 4);
    }

    #[test]
    fn untracked_file_makes_tree_dirty() {
        if !git_available() {
            return;
        }
        let dir = tempdir().unwrap();
        init_repo(dir.path());
        fs::write(dir.path().join("Dockerfile"), "FROM scratch\n").unwrap();
        commit_all(dir.path());
        fs::write(dir.path().join("notes.txt"), "wip\n").unwrap();

        assert!(!GitCli::new().is_clean(dir.path()).unwrap());
    }

    #[test]
    fn outside_repository_is_command_failure() {
        if !git_available() {
            return;
        }
        let dir = tempdir().unwrap();

        let err = GitCli::new().short_revision(dir.path()).unwrap_err();

        assert!(matches!(err, VcsError::CommandFailed { .. }));
    }

    #[test]
    fn missing_binary_is_unavailable() {
        let git = GitCli {
            program: "sidekick-no-such-git".to_string(),
        };
        let dir = tempdir().unwrap();

        assert!(matches!(
            git.is_clean(dir.path()),
            Err(VcsError::Unavailable(_))
        ));
    }
}
