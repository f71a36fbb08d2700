//! List command handler.

use crate::error::Result;
use crate::gh::PrClient;
use crate::git::GitClient;
use crate::output::{print_info, print_merged_branches, print_status_report};

use super::CommandContext;

/// Show local branches whose PR was merged.
///
/// With `all`, every local branch is shown under its PR status instead.
/// `verbose` adds the PR number and title to each line.
pub fn list_command<G: GitClient, P: PrClient>(
    ctx: &CommandContext<G, P>,
    verbose: bool,
    all: bool,
) -> Result<()> {
    ctx.ensure_repository()?;

    if all {
        let report = ctx
            .service
            .branch_statuses(&ctx.repo, ctx.reporter.as_ref())?;
        if report.is_empty() {
            print_info(&ctx.palette, "No local branches to check.");
            return Ok(());
        }
        print_status_report(&ctx.palette, &report, verbose);
        return Ok(());
    }

    let merged = ctx
        .service
        .merged_branches(&ctx.repo, ctx.reporter.as_ref())?;
    if merged.is_empty() {
        print_info(&ctx.palette, "No squash-merged branches found.");
        return Ok(());
    }
    print_merged_branches(&ctx.palette, &merged, verbose);

    Ok(())
}
