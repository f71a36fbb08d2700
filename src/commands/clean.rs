//! Clean command handler.
//!
//! Finds branches whose PR was merged, asks for confirmation and deletes them.

use crate::error::{AxeError, Result};
use crate::gh::PrClient;
use crate::git::GitClient;
use crate::output::{print_deletion_report, print_info, print_merged_branches, Palette};
use crate::prompt;

use super::CommandContext;

/// Options for the clean command.
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanOptions {
    /// List what would be deleted and stop
    pub dry_run: bool,
    /// Delete without asking
    pub force: bool,
}

pub fn clean_command<G: GitClient, P: PrClient>(
    ctx: &CommandContext<G, P>,
    options: CleanOptions,
) -> Result<()> {
    run_clean(ctx, options, |palette| {
        prompt::confirm(palette, "Delete these branches?", false)
    })
}

fn run_clean<G, P, F>(ctx: &CommandContext<G, P>, options: CleanOptions, confirm: F) -> Result<()>
where
    G: GitClient,
    P: PrClient,
    F: FnOnce(&Palette) -> bool,
{
    ctx.ensure_repository()?;

    let merged = ctx
        .service
        .merged_branches(&ctx.repo, ctx.reporter.as_ref())?;
    if merged.is_empty() {
        print_info(&ctx.palette, "No squash-merged branches found to delete.");
        return Ok(());
    }

    print_merged_branches(&ctx.palette, &merged, false);

    if options.dry_run {
        print_info(&ctx.palette, "(Dry run - no branches were deleted)");
        return Ok(());
    }

    if !options.force && !confirm(&ctx.palette) {
        print_info(&ctx.palette, "Cancelled.");
        return Ok(());
    }

    let mut names: Vec<String> = merged.into_iter().map(|b| b.name).collect();
    names.sort();

    let report = ctx
        .service
        .delete_branches(&ctx.repo, &names, ctx.reporter.as_ref());
    print_deletion_report(&ctx.palette, &report);

    if !report.skipped.is_empty() {
        return Err(AxeError::Interrupted);
    }
    Ok(())
}
