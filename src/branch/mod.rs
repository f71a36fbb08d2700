//! Branch classification engine.
//!
//! - [`status`] - Status categories and protected names
//! - [`pool`] - Bounded worker pool for PR lookups
//! - [`service`] - Discovery, classification and deletion

mod pool;
mod service;
mod status;

pub use pool::{CheckPool, MAX_WORKERS};
pub use service::{BranchService, DeletionReport};
pub use status::{is_protected, BranchStatus, ClassifiedBranch, StatusReport, PROTECTED_BRANCHES};
