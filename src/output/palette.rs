//! Colored or plain rendering of output lines.

use super::colors::*;

/// Decides whether output carries ANSI escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colored: bool,
}

impl Palette {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn colored() -> Self {
        Self::new(true)
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Wrap `text` in the given color codes, or return it unchanged when plain.
    pub fn paint(&self, codes: &[&str], text: &str) -> String {
        if !self.colored || codes.is_empty() {
            return text.to_string();
        }
        format!("{}{}{RESET}", codes.concat(), text)
    }

    pub fn success_line(&self, msg: &str) -> String {
        format!("{} {}", self.paint(&[GREEN], "✓"), msg)
    }

    pub fn error_line(&self, msg: &str) -> String {
        format!("{} {}", self.paint(&[RED, BOLD], "✗"), msg)
    }

    pub fn warning_line(&self, msg: &str) -> String {
        format!("{} {}", self.paint(&[YELLOW], "⚠"), msg)
    }

    pub fn info_line(&self, msg: &str) -> String {
        format!("{} {}", self.paint(&[CYAN], "ℹ"), msg)
    }

    pub fn header(&self, msg: &str) -> String {
        format!("\n{}", self.paint(&[BOLD], msg))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}
