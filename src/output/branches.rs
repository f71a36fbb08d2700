//! Branch listings, status groups and deletion results.

use terminal_size::{terminal_size, Width};

use crate::branch::{ClassifiedBranch, DeletionReport, StatusReport};
use crate::gh::PullRequestInfo;

use super::colors::*;
use super::palette::Palette;

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const MIN_TITLE_WIDTH: usize = 20;

fn get_terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH as usize)
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "es"
    }
}

/// Shorten `title` to at most `max_len` characters, ending in `...` when cut.
fn truncate_title(title: &str, max_len: usize) -> String {
    let first_line = title.lines().next().unwrap_or(title).trim();
    if first_line.chars().count() <= max_len {
        return first_line.to_string();
    }
    if max_len < 4 {
        return "...".to_string();
    }
    let truncated: String = first_line.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

pub fn format_branch(palette: &Palette, name: &str) -> String {
    format!("  {}", palette.paint(&[GREEN, BOLD], name))
}

/// `  name (PR #N) title`, with the title cut to fit in `width` columns.
pub fn format_branch_with_pr(
    palette: &Palette,
    name: &str,
    pr: &PullRequestInfo,
    width: usize,
) -> String {
    let pr_label = format!("(PR #{})", pr.number);
    let used = 2 + name.chars().count() + 1 + pr_label.chars().count() + 1;
    let title = truncate_title(&pr.title, width.saturating_sub(used).max(MIN_TITLE_WIDTH));

    format!(
        "  {} {} {}",
        palette.paint(&[GREEN, BOLD], name),
        palette.paint(&[YELLOW], &pr_label),
        palette.paint(&[CYAN], &title)
    )
}

fn format_classified(palette: &Palette, branch: &ClassifiedBranch, verbose: bool, width: usize) -> String {
    match (&branch.pr, verbose) {
        (Some(pr), true) => format_branch_with_pr(palette, &branch.name, pr, width),
        _ => format_branch(palette, &branch.name),
    }
}

fn sorted(branches: &[ClassifiedBranch]) -> Vec<&ClassifiedBranch> {
    let mut sorted: Vec<&ClassifiedBranch> = branches.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

/// Print the branches found by `axe list` / `axe clean`.
pub fn print_merged_branches(palette: &Palette, branches: &[ClassifiedBranch], verbose: bool) {
    let width = get_terminal_width();
    println!(
        "{}",
        palette.header(&format!(
            "Found {} squash-merged branch{}:",
            branches.len(),
            plural(branches.len())
        ))
    );
    for branch in sorted(branches) {
        println!("{}", format_classified(palette, branch, verbose, width));
    }
    println!();
}

/// Print every non-empty status group.
pub fn print_status_report(palette: &Palette, report: &StatusReport, verbose: bool) {
    let width = get_terminal_width();
    for (status, group) in report.iter() {
        if group.is_empty() {
            continue;
        }
        println!(
            "{}",
            palette.header(&format!("{} ({})", status.heading(), group.len()))
        );
        for branch in sorted(group) {
            println!("{}", format_classified(palette, branch, verbose, width));
        }
    }
    println!();
}

pub fn print_deletion_report(palette: &Palette, report: &DeletionReport) {
    for branch in &report.deleted {
        println!("{}", palette.success_line(&format!("Deleted: {}", branch)));
    }
    for branch in &report.failed {
        println!("{}", palette.error_line(&format!("Failed to delete {}", branch)));
    }
    for branch in &report.skipped {
        println!(
            "{}",
            palette.warning_line(&format!("Skipped {} (interrupted)", branch))
        );
    }

    let mut summary = format!(
        "\nDeleted {} branch{}",
        report.deleted.len(),
        plural(report.deleted.len())
    );
    if !report.failed.is_empty() {
        summary.push_str(&format!(" ({} failed)", report.failed.len()));
    }
    if !report.skipped.is_empty() {
        summary.push_str(&format!(" ({} skipped)", report.skipped.len()));
    }
    println!("{}", palette.paint(&[BOLD], &summary));
}
