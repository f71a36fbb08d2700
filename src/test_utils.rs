//! In-memory fakes shared across module tests.
//!
//! The branch service is exercised against these instead of real `git` and
//! `gh` processes.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use crate::error::{AxeError, Result};
use crate::gh::{PrClient, PrState, PullRequestInfo};
use crate::git::GitClient;
use crate::progress::ProgressReporter;
use crate::signal::SignalHandler;

// ============================================================================
// FakeGit
// ============================================================================

#[derive(Default)]
pub struct FakeGit {
    branches: Vec<String>,
    list_fails: bool,
    failing_deletes: HashSet<String>,
    shutdown_after: Option<(String, SignalHandler)>,
    deletes: Mutex<Vec<String>>,
}

impl FakeGit {
    pub fn with_branches(branches: &[&str]) -> Self {
        Self {
            branches: branches.iter().map(|b| b.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing_list() -> Self {
        Self {
            list_fails: true,
            ..Self::default()
        }
    }

    pub fn failing_delete(mut self, branch: &str) -> Self {
        self.failing_deletes.insert(branch.to_string());
        self
    }

    /// Request shutdown right after `branch` is deleted.
    pub fn shutdown_after_delete(mut self, branch: &str, shutdown: SignalHandler) -> Self {
        self.shutdown_after = Some((branch.to_string(), shutdown));
        self
    }

    pub fn delete_attempts(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

impl GitClient for FakeGit {
    fn validate_repository(&self, repo: &Path) -> Result<()> {
        if self.list_fails {
            return Err(AxeError::NotARepository(repo.to_path_buf()));
        }
        Ok(())
    }

    fn local_branches(&self, _repo: &Path) -> Result<Vec<String>> {
        if self.list_fails {
            return Err(AxeError::GitError("failed to get local branches".to_string()));
        }
        Ok(self.branches.clone())
    }

    fn delete_branch(&self, _repo: &Path, branch: &str) -> Result<()> {
        self.deletes.lock().unwrap().push(branch.to_string());

        if let Some((after, shutdown)) = &self.shutdown_after {
            if after == branch {
                shutdown.request_shutdown();
            }
        }

        if self.failing_deletes.contains(branch) {
            return Err(AxeError::GitError(format!(
                "failed to delete branch '{}'",
                branch
            )));
        }
        Ok(())
    }
}

// ============================================================================
// FakePrs
// ============================================================================

#[derive(Default)]
pub struct FakePrs {
    prs: HashMap<String, PullRequestInfo>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    queried: Mutex<Vec<String>>,
    merged_calls: AtomicUsize,
    latest_calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl FakePrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pr(mut self, branch: &str, pr: PullRequestInfo) -> Self {
        self.prs.insert(branch.to_string(), pr);
        self
    }

    pub fn failing_on(mut self, branch: &str) -> Self {
        self.failing.insert(branch.to_string());
        self
    }

    /// Hold every lookup for `delay` so overlapping calls can be observed.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }

    pub fn merged_calls(&self) -> usize {
        self.merged_calls.load(Ordering::SeqCst)
    }

    pub fn latest_calls(&self) -> usize {
        self.latest_calls.load(Ordering::SeqCst)
    }

    /// Highest number of lookups observed running at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn lookup(&self, branch: &str) -> Result<Option<PullRequestInfo>> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.queried.lock().unwrap().push(branch.to_string());

        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(branch) {
            return Err(AxeError::GhError(format!(
                "failed to check PR for branch '{}'",
                branch
            )));
        }
        Ok(self.prs.get(branch).cloned())
    }
}

impl PrClient for FakePrs {
    fn merged_pr(&self, _repo: &Path, branch: &str) -> Result<Option<PullRequestInfo>> {
        self.merged_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .lookup(branch)?
            .filter(|pr| pr.state == PrState::Merged))
    }

    fn latest_pr(&self, _repo: &Path, branch: &str) -> Result<Option<PullRequestInfo>> {
        self.latest_calls.fetch_add(1, Ordering::SeqCst);
        self.lookup(branch)
    }
}

// ============================================================================
// RecordingReporter
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(String),
    Update(String),
    Stop(String),
    Error(String),
}

/// Reporter that keeps every notification for later assertions.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn collect(&self, pick: impl Fn(&Event) -> Option<&String>) -> Vec<String> {
        self.events().iter().filter_map(|e| pick(e).cloned()).collect()
    }

    pub fn starts(&self) -> Vec<String> {
        self.collect(|e| match e {
            Event::Start(m) => Some(m),
            _ => None,
        })
    }

    pub fn updates(&self) -> Vec<String> {
        self.collect(|e| match e {
            Event::Update(m) => Some(m),
            _ => None,
        })
    }

    pub fn stops(&self) -> Vec<String> {
        self.collect(|e| match e {
            Event::Stop(m) => Some(m),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.collect(|e| match e {
            Event::Error(m) => Some(m),
            _ => None,
        })
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for RecordingReporter {
    fn start(&self, msg: &str) {
        self.push(Event::Start(msg.to_string()));
    }

    fn update(&self, msg: &str) {
        self.push(Event::Update(msg.to_string()));
    }

    fn stop(&self, msg: &str) {
        self.push(Event::Stop(msg.to_string()));
    }

    fn stop_with_error(&self, msg: &str) {
        self.push(Event::Error(msg.to_string()));
    }
}
