use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AxeError {
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("Git error: {0}")]
    GitError(String),

    #[error("GitHub CLI error: {0}")]
    GhError(String),

    #[error("Failed to parse PR data for branch {branch:?}: {source}")]
    PrParse {
        branch: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("PR lookup for branch {branch:?} timed out after {secs} seconds")]
    LookupTimeout { branch: String, secs: u64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shell completion error: {0}")]
    ShellCompletion(String),

    #[error("Failed to register signal handler: {0}")]
    SignalHandler(String),

    #[error("Interrupted")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AxeError>;
