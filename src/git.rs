use crate::error::{AxeError, Result};
use std::path::Path;
use std::process::Command;

/// Local branch operations, scoped to an explicit repository path.
pub trait GitClient: Send + Sync {
    /// Check that `repo` is a usable git repository.
    fn validate_repository(&self, repo: &Path) -> Result<()>;

    /// List local branch short names in the order git reports them.
    fn local_branches(&self, repo: &Path) -> Result<Vec<String>>;

    /// Force-delete a local branch.
    ///
    /// Squash-merged branches are never "fully merged" from git's point of
    /// view, so this must not refuse unmerged branches.
    fn delete_branch(&self, repo: &Path, branch: &str) -> Result<()>;
}

/// [`GitClient`] backed by the `git` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    fn git(repo: &Path) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(repo);
        cmd
    }
}

impl GitClient for GitCli {
    fn validate_repository(&self, repo: &Path) -> Result<()> {
        let ok = Self::git(repo)
            .args(["rev-parse", "--git-dir"])
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);

        if !ok {
            return Err(AxeError::NotARepository(repo.to_path_buf()));
        }
        Ok(())
    }

    fn local_branches(&self, repo: &Path) -> Result<Vec<String>> {
        log::debug!("git -C {} branch --format=%(refname:short)", repo.display());
        let output = Self::git(repo)
            .args(["branch", "--format=%(refname:short)"])
            .output()?;

        if !output.status.success() {
            return Err(AxeError::GitError(format!(
                "failed to get local branches: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(parse_branch_list(&String::from_utf8_lossy(&output.stdout)))
    }

    fn delete_branch(&self, repo: &Path, branch: &str) -> Result<()> {
        log::debug!("git -C {} branch -D {}", repo.display(), branch);
        let output = Self::git(repo).args(["branch", "-D", branch]).output()?;

        if !output.status.success() {
            return Err(AxeError::GitError(format!(
                "failed to delete branch '{}': {}",
                branch,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}

/// Split `git branch --format` output into branch names.
fn parse_branch_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
