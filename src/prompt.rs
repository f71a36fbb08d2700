use std::io::{self, Write};

use crate::output::{Palette, CYAN, GRAY};

/// Ask a yes/no question and return the user's choice
pub fn confirm(palette: &Palette, question: &str, default: bool) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!(
        "{} {} {} ",
        palette.paint(&[CYAN], "?"),
        question,
        palette.paint(&[GRAY], hint)
    );
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return default;
    }

    parse_confirmation(&input, default)
}

/// Interpret a typed answer. Anything other than yes/no falls back to `default`.
pub fn parse_confirmation(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}
