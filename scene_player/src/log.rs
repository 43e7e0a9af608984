//! Diagnostics logging for the scene player
//!
//! This module provides the logging side channel used wherever the renderer
//! contract has no error channel (teardown and notification calls):
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route diagnostics elsewhere (file, test capture, ...).
///
/// # Example
///
/// ```no_run
/// use scene_player::sp::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "sp::ScenePlayer", "sp::RendererHost")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame detail
    Trace,

    /// Development information
    Debug,

    /// Lifecycle events (scene activations, renderer setup)
    Info,

    /// Absorbed faults and suspicious host input
    Warn,

    /// Errors, with file:line details
    Error,
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// # Example
///
/// ```no_run
/// scene_player::sp_trace!("sp::ScenePlayer", "Frame {} rendered", 12);
/// ```
#[macro_export]
macro_rules! sp_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::sp::Diagnostics::log(
            $crate::sp::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! sp_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::sp::Diagnostics::log(
            $crate::sp::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// # Example
///
/// ```no_run
/// scene_player::sp_info!("sp::ScenePlayer", "Scene {} activated", 0);
/// ```
#[macro_export]
macro_rules! sp_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::sp::Diagnostics::log(
            $crate::sp::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! sp_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::sp::Diagnostics::log(
            $crate::sp::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// scene_player::sp_error!("sp::RendererHost", "Renderer panicked: {}", "boom");
/// ```
#[macro_export]
macro_rules! sp_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::sp::Diagnostics::log_detailed(
            $crate::sp::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
