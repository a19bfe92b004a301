#![deny(missing_docs)]
//! Shared logging utilities for the launchpad workspace.
//!
//! This crate provides the `flow_*` logging macros used across the codebase,
//! an active-attempt correlation helper, and a minimal test initializer for
//! the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the id of the attempt currently in flight.
    static ACTIVE_ATTEMPT: Cell<u64> = const { Cell::new(0) };
}

/// Records the attempt id the current thread is working on.
/// The shell calls this when it dispatches a provisioning effect, so that
/// later log lines can be correlated with the attempt.
pub fn set_active_attempt(attempt: u64) {
    ACTIVE_ATTEMPT.with(|v| v.set(attempt));
}

/// Retrieves the attempt id recorded for the current thread.
/// Returns 0 if no attempt has been dispatched yet.
pub fn get_active_attempt() -> u64 {
    ACTIVE_ATTEMPT.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! flow_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! flow_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! flow_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! flow_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! flow_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
