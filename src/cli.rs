//! Command-line definition for axe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "axe")]
#[command(
    version,
    about = "Find and delete local branches whose PRs were squash-merged",
    after_help = "EXAMPLES:
    # Show branches whose PR was merged
    axe list
    axe list --verbose

    # Group every local branch by PR status
    axe list --all

    # Delete merged branches
    axe clean --dry-run               # Preview only
    axe clean                         # Ask before deleting
    axe clean --force                 # Delete without asking

    # Work on another checkout
    axe --repo ~/src/project list"
)]
pub struct Cli {
    /// Path to the git repository
    #[arg(short, long, global = true, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub repo: PathBuf,

    /// Disable colored output (NO_COLOR is honored too)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List local branches whose PRs were merged
    #[command(after_help = "EXAMPLES:
    axe list                # Merged branches only
    axe list -v             # Include PR number and title
    axe list --all          # Every branch grouped by PR status")]
    List {
        /// Show PR number and title for each branch
        #[arg(short, long)]
        verbose: bool,

        /// Group every local branch by PR status
        #[arg(short, long)]
        all: bool,
    },

    /// Delete local branches whose PRs were merged
    #[command(after_help = "EXAMPLES:
    axe clean -n            # Show what would be deleted
    axe clean -f            # Delete without confirmation")]
    Clean {
        /// Show what would be deleted without deleting
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Output shell completion script to stdout (hidden utility command)
    #[command(hide = true)]
    Completions {
        /// Shell type to generate completions for (bash, zsh, or fish)
        shell: String,
    },
}
