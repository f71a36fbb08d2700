pub mod branch;
pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod gh;
pub mod git;
pub mod output;
pub mod progress;
pub mod prompt;
pub mod signal;

#[cfg(test)]
mod test_utils;

pub use branch::{BranchService, BranchStatus, ClassifiedBranch, DeletionReport, StatusReport};
pub use config::Config;
pub use error::{AxeError, Result};
