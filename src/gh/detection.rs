//! PR detection for branches.

use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{AxeError, Result};

use super::types::PullRequestInfo;

const PR_JSON_FIELDS: &str = "number,state,title,isDraft";
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Looks up the pull request associated with a branch.
///
/// `Ok(None)` means no PR exists. Errors are reserved for transport,
/// parsing, and timeout failures.
pub trait PrClient: Send + Sync {
    /// Most recent merged PR whose head is `branch`.
    fn merged_pr(&self, repo: &Path, branch: &str) -> Result<Option<PullRequestInfo>>;

    /// Most recent PR whose head is `branch`, in any state.
    fn latest_pr(&self, repo: &Path, branch: &str) -> Result<Option<PullRequestInfo>>;
}

/// [`PrClient`] backed by the GitHub CLI.
#[derive(Debug, Clone)]
pub struct GhCli {
    timeout: Option<Duration>,
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GhCli {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Kill `gh` calls that run longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn list_prs(&self, repo: &Path, branch: &str, state: &str) -> Result<Option<PullRequestInfo>> {
        log::debug!("gh pr list --state {} --head {}", state, branch);
        let mut cmd = Command::new("gh");
        cmd.args([
            "pr",
            "list",
            "--state",
            state,
            "--head",
            branch,
            "--json",
            PR_JSON_FIELDS,
            "--limit",
            "1",
        ])
        .current_dir(repo);

        let output = run_with_timeout(cmd, self.timeout).map_err(|e| match e {
            AxeError::LookupTimeout { secs, .. } => AxeError::LookupTimeout {
                branch: branch.to_string(),
                secs,
            },
            other => other,
        })?;

        if !output.status.success() {
            return Err(AxeError::GhError(format!(
                "failed to check PR for branch '{}': {}",
                branch,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        parse_pr_list(&String::from_utf8_lossy(&output.stdout), branch)
    }
}

impl PrClient for GhCli {
    fn merged_pr(&self, repo: &Path, branch: &str) -> Result<Option<PullRequestInfo>> {
        self.list_prs(repo, branch, "merged")
    }

    fn latest_pr(&self, repo: &Path, branch: &str) -> Result<Option<PullRequestInfo>> {
        self.list_prs(repo, branch, "all")
    }
}

/// Parse the JSON array printed by `gh pr list --json`, keeping the first entry.
pub(crate) fn parse_pr_list(stdout: &str, branch: &str) -> Result<Option<PullRequestInfo>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let prs: Vec<PullRequestInfo> =
        serde_json::from_str(trimmed).map_err(|source| AxeError::PrParse {
            branch: branch.to_string(),
            source,
        })?;

    Ok(prs.into_iter().next())
}

/// Run `cmd` to completion, killing it if it outlives `timeout`.
///
/// Output is collected after exit, so this is only suitable for commands
/// whose output fits in the pipe buffer.
pub(crate) fn run_with_timeout(mut cmd: Command, timeout: Option<Duration>) -> Result<Output> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(timeout) = timeout {
        let start = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(_)) => break,
                Ok(None) => {}
                Err(e) => {
                    kill_and_reap(&mut child);
                    return Err(e.into());
                }
            }
            if start.elapsed() >= timeout {
                kill_and_reap(&mut child);
                return Err(AxeError::LookupTimeout {
                    branch: String::new(),
                    secs: timeout.as_secs(),
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    Ok(child.wait_with_output()?)
}

/// Best-effort kill so an abandoned `gh` never outlives the lookup.
fn kill_and_reap(child: &mut Child) {
    if let Err(e) = child.kill() {
        log::debug!("failed to kill pid {}: {}", child.id(), e);
    }
    let _ = child.wait();
}
