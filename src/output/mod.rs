//! Terminal output formatting for axe.
//!
//! - [`palette`] - Colored or plain rendering of single lines
//! - [`messages`] - Error, warning, info and success messages
//! - [`branches`] - Branch listings, status groups and deletion results

pub mod branches;
pub mod messages;
pub mod palette;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

pub use branches::{
    format_branch, format_branch_with_pr, print_deletion_report, print_merged_branches,
    print_status_report,
};
pub use messages::{format_error, print_error, print_info};
pub use palette::Palette;
