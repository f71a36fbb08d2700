//! Branch status classification.

use std::collections::BTreeMap;
use std::fmt;

use crate::gh::{PrState, PullRequestInfo};

/// Branch names that are never classified or deleted.
pub const PROTECTED_BRANCHES: [&str; 2] = ["main", "master"];

/// True for `main`, `master` and the empty name.
pub fn is_protected(name: &str) -> bool {
    name.is_empty() || PROTECTED_BRANCHES.contains(&name)
}

/// Where a branch's pull request stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BranchStatus {
    Merged,
    Open,
    Closed,
    Draft,
    NoPr,
}

impl BranchStatus {
    /// Every status, in display order.
    pub const ALL: [BranchStatus; 5] = [
        BranchStatus::Merged,
        BranchStatus::Open,
        BranchStatus::Closed,
        BranchStatus::Draft,
        BranchStatus::NoPr,
    ];

    /// Classify a branch from its looked-up PR.
    ///
    /// Draft wins over state; an unrecognised state counts as no PR.
    pub fn classify(pr: Option<&PullRequestInfo>) -> Self {
        match pr {
            None => BranchStatus::NoPr,
            Some(pr) if pr.is_draft => BranchStatus::Draft,
            Some(pr) => match pr.state {
                PrState::Merged => BranchStatus::Merged,
                PrState::Open => BranchStatus::Open,
                PrState::Closed => BranchStatus::Closed,
                PrState::Unknown => BranchStatus::NoPr,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BranchStatus::Merged => "merged",
            BranchStatus::Open => "open",
            BranchStatus::Closed => "closed",
            BranchStatus::Draft => "draft",
            BranchStatus::NoPr => "no-pr",
        }
    }

    /// Heading used when listing a group of branches.
    pub fn heading(&self) -> &'static str {
        match self {
            BranchStatus::Merged => "Merged (ready to axe)",
            BranchStatus::Open => "Open",
            BranchStatus::Closed => "Closed",
            BranchStatus::Draft => "Draft",
            BranchStatus::NoPr => "No PR",
        }
    }
}

impl fmt::Display for BranchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A local branch together with its derived status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBranch {
    pub name: String,
    pub status: BranchStatus,
    pub pr: Option<PullRequestInfo>,
}

impl ClassifiedBranch {
    pub fn new(name: impl Into<String>, pr: Option<PullRequestInfo>) -> Self {
        Self {
            name: name.into(),
            status: BranchStatus::classify(pr.as_ref()),
            pr,
        }
    }
}

/// Branches grouped by status.
///
/// All five groups always exist, so lookups never need a presence check.
/// Order within a group is unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    groups: BTreeMap<BranchStatus, Vec<ClassifiedBranch>>,
}

impl Default for StatusReport {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReport {
    pub fn new() -> Self {
        Self {
            groups: BranchStatus::ALL.iter().map(|s| (*s, Vec::new())).collect(),
        }
    }

    pub fn insert(&mut self, branch: ClassifiedBranch) {
        self.groups.entry(branch.status).or_default().push(branch);
    }

    pub fn get(&self, status: BranchStatus) -> &[ClassifiedBranch] {
        self.groups.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Groups in display order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (BranchStatus, &[ClassifiedBranch])> {
        self.groups.iter().map(|(s, v)| (*s, v.as_slice()))
    }

    /// Number of branches across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<ClassifiedBranch> for StatusReport {
    fn from_iter<I: IntoIterator<Item = ClassifiedBranch>>(iter: I) -> Self {
        let mut report = StatusReport::new();
        for branch in iter {
            report.insert(branch);
        }
        report
    }
}
