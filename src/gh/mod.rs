//! GitHub CLI integration for PR lookups.
//!
//! # Modules
//!
//! - [`types`] - PR info and state as reported by `gh`
//! - [`detection`] - PR lookup per branch

mod detection;
mod types;

pub use detection::{GhCli, PrClient};
pub use types::{PrState, PullRequestInfo};
