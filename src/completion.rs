//! Shell completion scripts for axe.
//!
//! The hidden `axe completions <shell>` command prints a script generated by
//! `clap_complete` from the [`Cli`] definition.

use crate::cli::Cli;
use crate::error::{AxeError, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Shell names accepted by `axe completions`.
pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Parse a shell name such as `zsh` or a path such as `/bin/zsh`.
    pub fn from_name(name: &str) -> Result<ShellType> {
        let shell_name = std::path::Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);

        match shell_name {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(AxeError::ShellCompletion(format!(
                "Unsupported shell: '{}'",
                shell_name
            ))),
        }
    }

    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn generate_completion_script(shell: ShellType) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell.to_clap_shell(), &mut cmd, "axe", &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}

pub fn print_completion_script(shell: ShellType) {
    print!("{}", generate_completion_script(shell));
}
