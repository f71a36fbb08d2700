//! axe CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use axe::cli::{Cli, Commands};
use axe::commands::{clean_command, list_command, CleanOptions, CommandContext};
use axe::completion::{print_completion_script, ShellType, SUPPORTED_SHELLS};
use axe::config::{load_config, Config};
use axe::gh::GhCli;
use axe::git::GitCli;
use axe::output::{print_error, Palette};
use axe::progress::SpinnerReporter;
use axe::signal::SignalHandler;
use axe::BranchService;
use clap::Parser;
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Completions work anywhere and need no config
    if let Commands::Completions { shell } = &cli.command {
        match ShellType::from_name(shell) {
            Ok(shell_type) => print_completion_script(shell_type),
            Err(e) => {
                print_error(
                    &Palette::plain(),
                    &format!("{}\nSupported shells: {}", e, SUPPORTED_SHELLS.join(", ")),
                );
                std::process::exit(1);
            }
        }
        return;
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            print_error(&Palette::plain(), &e.to_string());
            std::process::exit(1);
        }
    };
    let palette = Palette::new(use_color(&config, cli.no_color));

    let shutdown = SignalHandler::new().unwrap_or_else(|e| {
        log::warn!("{}; Ctrl+C will terminate immediately", e);
        SignalHandler::detached()
    });

    let service = BranchService::new(
        GitCli::new(),
        GhCli::new().with_timeout(config.lookup_timeout()),
    )
    .with_pool(config.check_pool())
    .with_shutdown(shutdown);

    let ctx = CommandContext {
        repo: cli.repo,
        palette,
        service,
        reporter: Box::new(SpinnerReporter::new(palette)),
    };

    let result = match cli.command {
        Commands::List { verbose, all } => list_command(&ctx, verbose, all),
        Commands::Clean { dry_run, force } => {
            clean_command(&ctx, CleanOptions { dry_run, force })
        }
        // Handled before config was loaded
        Commands::Completions { .. } => Ok(()),
    };

    if let Err(e) = result {
        print_error(&palette, &e.to_string());
        std::process::exit(1);
    }
}

/// Color is on unless disabled by config, `--no-color` or a set `NO_COLOR`.
fn use_color(config: &Config, no_color_flag: bool) -> bool {
    config.color && !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}
