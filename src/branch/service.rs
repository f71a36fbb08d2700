//! Branch discovery, classification and deletion.

use std::path::Path;

use crate::error::{AxeError, Result};
use crate::gh::PrClient;
use crate::git::GitClient;
use crate::progress::ProgressReporter;
use crate::signal::SignalHandler;

use super::pool::CheckPool;
use super::status::{is_protected, BranchStatus, ClassifiedBranch, StatusReport};

/// Outcome of a batch deletion, in the order branches were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub deleted: Vec<String>,
    pub failed: Vec<String>,
    /// Never attempted because a shutdown was requested.
    pub skipped: Vec<String>,
}

/// Orchestrates git and GitHub lookups for branch cleanup.
pub struct BranchService<G, P> {
    git: G,
    prs: P,
    pool: CheckPool,
    shutdown: Option<SignalHandler>,
}

impl<G: GitClient, P: PrClient> BranchService<G, P> {
    pub fn new(git: G, prs: P) -> Self {
        Self {
            git,
            prs,
            pool: CheckPool::default(),
            shutdown: None,
        }
    }

    pub fn with_pool(mut self, pool: CheckPool) -> Self {
        self.pool = pool;
        self
    }

    /// Stop checking and deleting once `shutdown` fires.
    pub fn with_shutdown(mut self, shutdown: SignalHandler) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn prs(&self) -> &P {
        &self.prs
    }

    /// Local branches whose PR was merged on GitHub.
    ///
    /// Branches whose lookup fails or finds nothing are left out.
    pub fn merged_branches(
        &self,
        repo: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<ClassifiedBranch>> {
        let branches = self.candidate_branches(repo, reporter)?;
        if branches.is_empty() {
            return Ok(Vec::new());
        }

        reporter.start(&format!(
            "Looking for branches to chop ({} to check)...",
            branches.len()
        ));
        let merged = self
            .pool
            .run(branches, reporter, self.shutdown.as_ref(), |branch| {
                match self.prs.merged_pr(repo, branch) {
                    Ok(pr) => Some(ClassifiedBranch::new(branch, pr))
                        .filter(|b| b.status == BranchStatus::Merged),
                    Err(e) => {
                        log::warn!("skipping {}: {}", branch, e);
                        None
                    }
                }
            });
        self.check_interrupted(reporter)?;
        reporter.stop(&format!("Found {} branches ready to axe", merged.len()));

        Ok(merged)
    }

    /// Every local branch grouped by the state of its most recent PR.
    ///
    /// A failed lookup classifies the branch as [`BranchStatus::NoPr`].
    pub fn branch_statuses(
        &self,
        repo: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<StatusReport> {
        let branches = self.candidate_branches(repo, reporter)?;
        if branches.is_empty() {
            return Ok(StatusReport::new());
        }

        let total = branches.len();
        reporter.start(&format!("Checking PR status for {} branches...", total));
        let classified = self
            .pool
            .run(branches, reporter, self.shutdown.as_ref(), |branch| {
                let pr = self.prs.latest_pr(repo, branch).unwrap_or_else(|e| {
                    log::warn!("no PR data for {}: {}", branch, e);
                    None
                });
                Some(ClassifiedBranch::new(branch, pr))
            });
        self.check_interrupted(reporter)?;
        reporter.stop(&format!("Completed status check for {} branches", total));

        Ok(classified.into_iter().collect())
    }

    /// Force-delete `branches` one at a time, in order.
    ///
    /// A failure never stops the batch. Protected names are refused without
    /// touching git and reported as failed.
    pub fn delete_branches(
        &self,
        repo: &Path,
        branches: &[String],
        reporter: &dyn ProgressReporter,
    ) -> DeletionReport {
        let mut report = DeletionReport::default();
        let total = branches.len();

        reporter.start(&format!("Chopping {} branches...", total));
        for (i, branch) in branches.iter().enumerate() {
            if self.shutdown_requested() {
                report.skipped.extend(branches[i..].iter().cloned());
                break;
            }

            reporter.update(&format!("Chopping ({}/{}): {}", i + 1, total, branch));

            if is_protected(branch) {
                log::warn!("refusing to delete protected branch {:?}", branch);
                report.failed.push(branch.clone());
                continue;
            }

            match self.git.delete_branch(repo, branch) {
                Ok(()) => report.deleted.push(branch.clone()),
                Err(e) => {
                    log::warn!("{}", e);
                    report.failed.push(branch.clone());
                }
            }
        }
        reporter.stop(&format!("Chopped {} branches", report.deleted.len()));

        report
    }

    /// Discover local branches and drop protected names.
    fn candidate_branches(
        &self,
        repo: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<String>> {
        reporter.start("Fetching local branches...");
        let branches = match self.git.local_branches(repo) {
            Ok(branches) => branches,
            Err(e) => {
                reporter.stop_with_error(&format!("Failed to fetch local branches: {}", e));
                return Err(e);
            }
        };
        reporter.stop(&format!("Found {} local branches", branches.len()));

        Ok(branches
            .into_iter()
            .filter(|branch| !is_protected(branch))
            .collect())
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown
            .as_ref()
            .is_some_and(SignalHandler::is_shutdown_requested)
    }

    fn check_interrupted(&self, reporter: &dyn ProgressReporter) -> Result<()> {
        if self.shutdown_requested() {
            reporter.stop_with_error("Interrupted");
            return Err(AxeError::Interrupted);
        }
        Ok(())
    }
}
