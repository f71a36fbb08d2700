//! Core types for GitHub PR lookups.

use serde::Deserialize;
use std::fmt;

/// Lifecycle state of a pull request, as reported by `gh`.
///
/// Matching is case-sensitive: only `MERGED`, `OPEN` and `CLOSED` are
/// recognised, anything else maps to [`PrState::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrState {
    Merged,
    Open,
    Closed,
    #[serde(other)]
    Unknown,
}

impl PrState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrState::Merged => "MERGED",
            PrState::Open => "OPEN",
            PrState::Closed => "CLOSED",
            PrState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for PrState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pull request associated with a local branch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestInfo {
    /// PR number
    pub number: u64,
    pub state: PrState,
    pub title: String,
    #[serde(default)]
    pub is_draft: bool,
}

impl PullRequestInfo {
    pub fn new(number: u64, state: PrState, title: impl Into<String>) -> Self {
        Self {
            number,
            state,
            title: title.into(),
            is_draft: false,
        }
    }

    pub fn draft(mut self) -> Self {
        self.is_draft = true;
        self
    }
}
