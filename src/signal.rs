//! Ctrl+C handling for cooperative cancellation.
//!
//! The handler only flips a shared flag. Branch checks and deletions poll
//! the flag between units of work and wind down on their own.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{AxeError, Result};

/// Shared shutdown flag, optionally wired to SIGINT.
///
/// Cloning shares the same flag.
#[derive(Clone, Debug, Default)]
pub struct SignalHandler {
    shutdown_flag: Arc<AtomicBool>,
}

impl SignalHandler {
    /// Create a handler and register it for SIGINT.
    ///
    /// Only one SIGINT handler can be registered per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the signal handler cannot be registered.
    pub fn new() -> Result<Self> {
        let handler = Self::detached();
        let flag = Arc::clone(&handler.shutdown_flag);

        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .map_err(|e| AxeError::SignalHandler(e.to_string()))?;

        Ok(handler)
    }

    /// A flag that is not connected to any signal.
    pub fn detached() -> Self {
        Self {
            shutdown_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_flag.load(Ordering::SeqCst)
    }

    pub fn request_shutdown(&self) {
        self.shutdown_flag.store(true, Ordering::SeqCst);
    }
}
