use crate::output::Palette;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Receives phase notifications while branches are discovered, checked and
/// deleted.
///
/// Implementations are called from worker threads and must not block for
/// any meaningful time.
pub trait ProgressReporter: Send + Sync {
    fn start(&self, msg: &str);
    fn update(&self, msg: &str);
    fn stop(&self, msg: &str);
    fn stop_with_error(&self, msg: &str);
}

// ============================================================================
// SpinnerReporter: indicatif spinner on stderr
// ============================================================================

/// Spinner that shows the current phase and prints a check mark or cross
/// when the phase ends.
pub struct SpinnerReporter {
    spinner: Mutex<Option<ProgressBar>>,
    palette: Palette,
}

impl SpinnerReporter {
    pub fn new(palette: Palette) -> Self {
        Self {
            spinner: Mutex::new(None),
            palette,
        }
    }

    fn make_spinner(&self) -> ProgressBar {
        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        let template = if self.palette.is_colored() {
            "{spinner:.cyan} {msg}"
        } else {
            "{spinner} {msg}"
        };
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars(SPINNER_CHARS)
            .template(template)
        {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }

    /// Clear the active spinner, if any, before printing a final line.
    fn finish(&self) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(spinner) = guard.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn start(&self, msg: &str) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(previous) = guard.take() {
                previous.finish_and_clear();
            }
            let spinner = self.make_spinner();
            spinner.set_message(msg.to_string());
            *guard = Some(spinner);
        }
    }

    fn update(&self, msg: &str) {
        if let Ok(guard) = self.spinner.lock() {
            if let Some(spinner) = guard.as_ref() {
                spinner.set_message(msg.to_string());
            }
        }
    }

    fn stop(&self, msg: &str) {
        self.finish();
        eprintln!("{}", self.palette.success_line(msg));
    }

    fn stop_with_error(&self, msg: &str) {
        self.finish();
        eprintln!("{}", self.palette.error_line(msg));
    }
}

impl Drop for SpinnerReporter {
    fn drop(&mut self) {
        self.finish();
    }
}

// ============================================================================
// SilentReporter
// ============================================================================

/// Reporter that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn start(&self, _msg: &str) {}
    fn update(&self, _msg: &str) {}
    fn stop(&self, _msg: &str) {}
    fn stop_with_error(&self, _msg: &str) {}
}
