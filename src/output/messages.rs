//! Basic message output functions.

use super::palette::Palette;

/// `✗ Error: <msg>`, the line printed when a command fails.
pub fn format_error(palette: &Palette, msg: &str) -> String {
    palette.error_line(&format!("Error: {}", msg))
}

/// Print an error message to stderr.
pub fn print_error(palette: &Palette, msg: &str) {
    eprintln!("{}", format_error(palette, msg));
}

pub fn print_info(palette: &Palette, msg: &str) {
    println!("{}", palette.info_line(msg));
}
