//! CLI command handlers for axe.
//!
//! - [`list`] - Show merged branches, or every branch grouped by PR status
//! - [`clean`] - Delete merged branches

mod clean;
mod list;

pub use clean::{clean_command, CleanOptions};
pub use list::list_command;

use std::path::PathBuf;

use crate::branch::BranchService;
use crate::error::Result;
use crate::gh::PrClient;
use crate::git::GitClient;
use crate::output::Palette;
use crate::progress::ProgressReporter;

/// Everything a command needs to talk to git, GitHub and the terminal.
pub struct CommandContext<G, P> {
    pub repo: PathBuf,
    pub palette: Palette,
    pub service: BranchService<G, P>,
    pub reporter: Box<dyn ProgressReporter>,
}

impl<G: GitClient, P: PrClient> CommandContext<G, P> {
    /// Fail early with [`crate::AxeError::NotARepository`] before any lookup.
    fn ensure_repository(&self) -> Result<()> {
        self.service.git().validate_repository(&self.repo)
    }
}
